//! Routes 模块
//!
//! 定义 API 路由。

pub mod catalog_routes;
pub mod chat_routes;
pub mod conversation_routes;
