//! 对话 DTO
//!
//! 定义对话相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::LanguageTag;
use crate::services::session::{ConversationStats, TurnOutcome};

/// 对话请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    /// 用户消息
    pub message: String,
    /// 用户画像更新（如 name、preferred_style）
    pub context: Option<Map<String, Value>>,
    /// 会话 ID，缺省时使用默认会话
    pub session_id: Option<String>,
}

/// 对话响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub language: LanguageTag,
    pub timestamp: String,
    pub conversation_stats: ConversationStats,
}

impl From<TurnOutcome> for ChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            response: outcome.response,
            language: outcome.language,
            timestamp: outcome.timestamp.to_rfc3339(),
            conversation_stats: outcome.stats,
        }
    }
}
