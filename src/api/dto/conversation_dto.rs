//! 对话历史 DTO

use serde::{Deserialize, Serialize};

use crate::models::{Exchange, LanguageTag, Originator};

/// 历史记录查询参数
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub session_id: Option<String>,
    pub limit: Option<usize>,
}

/// 会话定位参数
#[derive(Debug, Default, Deserialize)]
pub struct SessionParams {
    pub session_id: Option<String>,
}

/// 历史记录条目
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub content: String,
    pub sender: Originator,
    pub timestamp: String,
    pub language: LanguageTag,
}

impl From<Exchange> for HistoryEntry {
    fn from(exchange: Exchange) -> Self {
        Self {
            id: exchange.id,
            content: exchange.text,
            sender: exchange.originator,
            timestamp: exchange.created_at.to_rfc3339(),
            language: exchange.language,
        }
    }
}

/// 清空会话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub message: String,
}
