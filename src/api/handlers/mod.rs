//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod catalog_handler;
pub mod chat_handler;
pub mod conversation_handler;

pub use catalog_handler::*;
pub use chat_handler::*;
pub use conversation_handler::*;
