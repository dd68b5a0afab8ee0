use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 消息发送方
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Originator {
    /// 顾客消息
    #[default]
    User,
    /// 机器人回复
    Bot,
}

/// 语言标签
///
/// 英语为主语言，斯瓦希里语为第二语言。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LanguageTag {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sw")]
    Swahili,
}

impl LanguageTag {
    /// 语言代码
    pub fn code(&self) -> &'static str {
        match self {
            LanguageTag::English => "en",
            LanguageTag::Swahili => "sw",
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 对话记录条目
///
/// 每个入站/出站消息一条，创建后不再修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// 条目唯一标识
    pub id: String,

    /// 消息文本
    pub text: String,

    /// 发送方
    pub originator: Originator,

    /// 创建时间
    pub created_at: DateTime<Utc>,

    /// 语言标签
    pub language: LanguageTag,
}

impl Exchange {
    /// 创建新条目
    pub fn new(text: &str, originator: Originator, language: LanguageTag) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            originator,
            created_at: Utc::now(),
            language,
        }
    }

    /// 是否为顾客消息
    pub fn is_user(&self) -> bool {
        self.originator == Originator::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_new() {
        let exchange = Exchange::new("Habari", Originator::User, LanguageTag::Swahili);
        assert_eq!(exchange.text, "Habari");
        assert!(exchange.is_user());
        assert_eq!(exchange.language, LanguageTag::Swahili);
        assert!(!exchange.id.is_empty());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Originator::Bot).unwrap(), "\"bot\"");
        assert_eq!(serde_json::to_string(&LanguageTag::Swahili).unwrap(), "\"sw\"");
        assert_eq!(LanguageTag::English.to_string(), "en");
    }
}
