//! 可观测性模块
//!
//! 提供对话指标、健康检查和日志初始化。

use axum::{Json, Router, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::services::responder::ReplyRoute;

// ===== Simple Metrics (using atomics for zero-dep implementation) =====

/// 对话指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub turns_total: AtomicU64,
    pub turns_rejected: AtomicU64,
    pub size_guide_replies: AtomicU64,
    pub category_replies: AtomicU64,
    pub fallback_replies: AtomicU64,
    pub sessions_created: AtomicU64,
    pub sessions_cleared: AtomicU64,
}

impl AppMetrics {
    /// 记录一轮成功的对话
    pub fn record_turn(&self, route: &ReplyRoute) {
        self.turns_total.fetch_add(1, Ordering::Relaxed);
        let counter = match route {
            ReplyRoute::SizeGuide => &self.size_guide_replies,
            ReplyRoute::Category(_) => &self.category_replies,
            ReplyRoute::Empathetic | ReplyRoute::Generic => &self.fallback_replies,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录被拒绝的输入
    pub fn record_rejected(&self) {
        self.turns_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session_created(&self) {
        self.sessions_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_session_cleared(&self) {
        self.sessions_cleared.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 文本格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP chat_turns_total Total chat turns answered
# TYPE chat_turns_total counter
chat_turns_total {}
# HELP chat_turns_rejected_total Chat turns rejected as invalid input
# TYPE chat_turns_rejected_total counter
chat_turns_rejected_total {}
# HELP chat_replies_total Replies by decision path
# TYPE chat_replies_total counter
chat_replies_total{{route="size_guide"}} {}
chat_replies_total{{route="category"}} {}
chat_replies_total{{route="fallback"}} {}
# HELP chat_sessions_created_total Sessions created
# TYPE chat_sessions_created_total counter
chat_sessions_created_total {}
# HELP chat_sessions_cleared_total Sessions cleared
# TYPE chat_sessions_cleared_total counter
chat_sessions_cleared_total {}
"#,
            self.turns_total.load(Ordering::Relaxed),
            self.turns_rejected.load(Ordering::Relaxed),
            self.size_guide_replies.load(Ordering::Relaxed),
            self.category_replies.load(Ordering::Relaxed),
            self.fallback_replies.load(Ordering::Relaxed),
            self.sessions_created.load(Ordering::Relaxed),
            self.sessions_cleared.load(Ordering::Relaxed),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub dataset: String,
    pub categories: usize,
}

/// 可观测性状态
#[derive(Debug, Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
    pub dataset: String,
    pub categories: usize,
}

impl ObservabilityState {
    pub fn new(metrics: Arc<AppMetrics>, version: &str, dataset: &str, categories: usize) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version: version.to_string(),
            dataset: dataset.to_string(),
            categories,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}

/// 健康检查
pub async fn health_check(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        dataset: state.dataset.clone(),
        categories: state.categories,
    })
}

/// Prometheus 指标端点
pub async fn metrics(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, state.metrics.gather())
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先，其次使用配置中的级别。
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);
    if config.structured {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true).with_line_number(true))
            .try_init()?;
    }

    Ok(())
}
