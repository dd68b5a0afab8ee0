//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use std::time::Duration;

use crate::api::app_state::AppState;
use crate::config::AppConfig;
use crate::security::{build_cors_layer, security_headers_middleware};
use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(routes::chat_routes::create_chat_router())
        .merge(routes::catalog_routes::create_catalog_router())
        .merge(routes::conversation_routes::create_conversation_router());

    let mut router = Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(config.server.max_request_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout,
        )));

    if config.security.security_headers {
        router = router.layer(axum::middleware::from_fn(security_headers_middleware));
    }

    if let Some(cors) = build_cors_layer(&config.security.cors_origins) {
        router = router.layer(cors);
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
