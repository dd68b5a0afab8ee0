//! 内置只读参考数据
//!
//! 应答模式表（两个数据集）、商品目录、尺码参考表。

pub mod catalog;
pub mod extended;
pub mod storefront;

use once_cell::sync::Lazy;

use crate::config::DatasetKind;
use crate::error::Result;
use crate::models::{PatternTable, ProductCatalog, SizeChart};

pub use storefront::GREETINGS;

/// 商品目录
pub static PRODUCT_CATALOG: Lazy<ProductCatalog> = Lazy::new(catalog::product_catalog);

/// 尺码参考表
pub static SIZE_CHART: Lazy<SizeChart> = Lazy::new(catalog::size_chart);

/// 构建指定数据集的应答模式表
pub fn pattern_table(kind: DatasetKind) -> Result<PatternTable> {
    match kind {
        DatasetKind::Storefront => PatternTable::build(storefront::CATEGORIES, storefront::PRIORITY),
        DatasetKind::Extended => PatternTable::build(extended::CATEGORIES, extended::PRIORITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_table_builds() {
        let table = pattern_table(DatasetKind::Storefront).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.priority_names(),
            vec!["sizing", "payment", "delivery", "thanks"]
        );
        assert_eq!(
            table.remainder_names(),
            vec!["greetings", "traditional_wear", "products", "store_info"]
        );
    }

    #[test]
    fn test_extended_table_keeps_catch_all_last() {
        let table = pattern_table(DatasetKind::Extended).unwrap();
        let last = table.scan_order().last().unwrap();
        assert_eq!(last.name, "fallback");
        assert!(last.is_catch_all());
        assert_eq!(table.scan_order().filter(|c| c.is_catch_all()).count(), 1);
    }

    #[test]
    fn test_storefront_has_no_catch_all() {
        let table = pattern_table(DatasetKind::Storefront).unwrap();
        assert!(table.scan_order().all(|c| !c.is_catch_all()));
    }
}
