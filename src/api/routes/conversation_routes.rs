//! Conversation Routes
//!
//! 定义对话历史相关的 API 路由。

use crate::api::handlers::conversation_handler::*;
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;

/// 创建对话历史路由器
pub fn create_conversation_router() -> Router<AppState> {
    Router::new()
        .route("/conversation/history", get(get_history))
        .route("/conversation/clear", post(clear_conversation))
}
