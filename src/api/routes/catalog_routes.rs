//! Catalog Routes
//!
//! 定义商品目录 API 路由。

use crate::api::handlers::catalog_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建商品目录路由器
pub fn create_catalog_router() -> Router<AppState> {
    Router::new().route("/products", get(get_products))
}
