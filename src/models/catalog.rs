//! 商品目录数据模型

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// 尺码标签：字母尺码或数字腰围
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeLabel {
    Letter(String),
    Waist(u32),
}

impl SizeLabel {
    pub fn letter(label: &str) -> Self {
        SizeLabel::Letter(label.to_string())
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeLabel::Letter(label) => f.write_str(label),
            SizeLabel::Waist(inches) => write!(f, "{}", inches),
        }
    }
}

/// 商品
#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct Product {
    /// 商品名称
    pub name: String,
    /// 价格（KSh）
    pub price: u32,
    /// 可选尺码
    pub sizes: Vec<SizeLabel>,
    /// 可选颜色
    pub colors: Vec<String>,
    /// 风格分类
    pub category: String,
}

/// 商品目录
///
/// 系列按固定顺序序列化为 JSON 对象。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductCatalog {
    collections: Vec<(String, Vec<Product>)>,
}

impl ProductCatalog {
    pub fn new(collections: Vec<(String, Vec<Product>)>) -> Self {
        Self { collections }
    }

    /// 按系列名查找
    pub fn collection(&self, name: &str) -> Option<&[Product]> {
        self.collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, products)| products.as_slice())
    }

    /// 系列名称（有序）
    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|(n, _)| n.as_str())
    }

    /// 商品总数
    pub fn product_count(&self) -> usize {
        self.collections.iter().map(|(_, p)| p.len()).sum()
    }
}

impl Serialize for ProductCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.collections.len()))?;
        for (name, products) in &self.collections {
            map.serialize_entry(name, products)?;
        }
        map.end()
    }
}
