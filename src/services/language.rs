//! 语言识别
//!
//! 统计文本中出现的不同斯瓦希里语关键词（整词、忽略大小写），达到阈值即标记为斯瓦希里语。
//! 纯函数，没有部分得分。

use std::collections::HashSet;

use crate::models::LanguageTag;

/// 斯瓦希里语关键词
const SWAHILI_KEYWORDS: &[&str] = &[
    "jambo", "mambo", "habari", "asante", "karibu", "sawa", "nzuri", "bei", "nguo", "duka",
    "vipi", "ya", "na", "kwa", "gani", "ngapi", "nataka", "tafadhali",
];

/// 判定为斯瓦希里语所需的最少关键词数
pub const SWAHILI_THRESHOLD: usize = 2;

/// 统计出现的不同关键词个数，重复出现只算一次
pub fn swahili_keyword_count(text: &str) -> usize {
    let normalized = text.to_lowercase();
    let words: HashSet<&str> = normalized.split(|c: char| !c.is_alphanumeric()).collect();
    SWAHILI_KEYWORDS
        .iter()
        .filter(|keyword| words.contains(*keyword))
        .count()
}

/// 识别文本语言
pub fn detect_language(text: &str) -> LanguageTag {
    if swahili_keyword_count(text) >= SWAHILI_THRESHOLD {
        LanguageTag::Swahili
    } else {
        LanguageTag::English
    }
}
