//! 类别匹配
//!
//! 只做小写归一化：先按顺序扫描优先类别，再按表顺序扫描其余类别，
//! 第一个有规则命中的类别胜出。无副作用。

use crate::models::{PatternCategory, PatternTable};

/// 匹配结果
#[derive(Debug, Clone)]
pub struct CategoryMatch<'a> {
    /// 命中的类别
    pub category: &'a PatternCategory,
    /// 命中规则的第一个捕获组（无捕获组时为整体匹配）
    pub capture: Option<String>,
}

impl CategoryMatch<'_> {
    pub fn name(&self) -> &str {
        &self.category.name
    }
}

/// 在模式表中查找第一个命中的类别
pub fn find_category<'a>(table: &'a PatternTable, text: &str) -> Option<CategoryMatch<'a>> {
    let normalized = text.to_lowercase();

    for category in table.scan_order() {
        for rule in &category.rules {
            if let Some(caps) = rule.captures(&normalized) {
                let capture = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty());
                return Some(CategoryMatch { category, capture });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetKind;
    use crate::dataset::pattern_table;
    use rstest::rstest;

    fn storefront() -> PatternTable {
        pattern_table(DatasetKind::Storefront).unwrap()
    }

    #[rstest]
    #[case("Hello", "greetings")]
    #[case("HABARI yako", "greetings")]
    #[case("How do I pay with M-Pesa?", "payment")]
    #[case("Do you deliver to Kisumu?", "delivery")]
    #[case("I need a kitenge for a wedding", "traditional_wear")]
    #[case("show me your jackets", "products")]
    #[case("where is your duka", "store_info")]
    #[case("asante sana", "thanks")]
    #[case("bei ya dress", "products")]
    fn test_storefront_categories(#[case] input: &str, #[case] expected: &str) {
        let table = storefront();
        let matched = find_category(&table, input).expect("should match");
        assert_eq!(matched.name(), expected);
    }

    #[rstest]
    #[case("hello, what is the price of this dress", "payment")]
    #[case("hi, is this dress available in large", "sizing")]
    #[case("great kitenge collection", "thanks")]
    #[case("hello, do you ship to Mombasa", "delivery")]
    fn test_priority_category_wins(#[case] input: &str, #[case] expected: &str) {
        let table = storefront();
        assert_eq!(find_category(&table, input).unwrap().name(), expected);
    }

    #[test]
    fn test_no_match_is_none() {
        let table = storefront();
        assert!(find_category(&table, "asdkjasd random gibberish").is_none());
        assert!(find_category(&table, "").is_none());
    }

    #[test]
    fn test_word_boundaries_respected() {
        let table = storefront();
        // "this" contains "hi" but is not a greeting
        assert!(find_category(&table, "this").is_none());
    }

    #[test]
    fn test_extended_capture_and_fallback() {
        let table = pattern_table(DatasetKind::Extended).unwrap();

        let matched = find_category(&table, "Do you have size 38?").unwrap();
        assert_eq!(matched.name(), "size_number");
        assert_eq!(matched.capture.as_deref(), Some("38"));

        let matched = find_category(&table, "any colour in Red?").unwrap();
        assert_eq!(matched.name(), "colour");
        assert_eq!(matched.capture.as_deref(), Some("red"));

        let matched = find_category(&table, "asdkjasd").unwrap();
        assert_eq!(matched.name(), "fallback");
    }

    #[test]
    fn test_extended_specific_categories_beat_catch_all() {
        let table = pattern_table(DatasetKind::Extended).unwrap();
        assert_eq!(find_category(&table, "what is the price of a gown").unwrap().name(), "price_dress");
        assert_eq!(find_category(&table, "kwaheri").unwrap().name(), "farewell");
        assert_eq!(find_category(&table, "track my order").unwrap().name(), "order_tracking");
    }
}
