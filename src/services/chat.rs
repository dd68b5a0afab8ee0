//! 对话服务
//!
//! 对外提供一轮对话、历史记录、清空会话和商品目录四个操作。
//! 输入校验在取得会话之前完成，被拒绝的输入不会改变任何状态。

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use crate::config::ChatConfig;
use crate::dataset::PRODUCT_CATALOG;
use crate::error::Result;
use crate::models::{Exchange, ProductCatalog};
use crate::observability::AppMetrics;
use crate::security::RequestValidator;
use crate::services::responder::Responder;
use crate::services::session::{SessionRegistry, TurnOutcome};

/// 对话服务 trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// 处理一轮对话
    async fn process_turn(
        &self,
        session_id: &str,
        text: &str,
        updates: &Map<String, Value>,
    ) -> Result<TurnOutcome>;

    /// 最近的历史记录，`limit` 上限为 history_limit，0 返回空列表
    async fn recent_history(&self, session_id: &str, limit: Option<usize>) -> Result<Vec<Exchange>>;

    /// 清空会话；会话不存在时什么也不做
    async fn clear_session(&self, session_id: &str) -> Result<()>;

    /// 商品目录
    fn product_catalog(&self) -> &'static ProductCatalog;

    /// 未指定会话时使用的会话 ID
    fn default_session_id(&self) -> &str;
}

/// 对话服务实现
pub struct ChatServiceImpl {
    responder: Responder,
    sessions: SessionRegistry,
    validator: RequestValidator,
    config: ChatConfig,
    metrics: Arc<AppMetrics>,
}

impl ChatServiceImpl {
    /// 创建新的服务实例
    pub fn new(responder: Responder, config: ChatConfig, metrics: Arc<AppMetrics>) -> Self {
        Self {
            responder,
            sessions: SessionRegistry::new(config.rng_seed),
            validator: RequestValidator::new(config.max_message_length),
            config,
            metrics,
        }
    }

    fn cap_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.config.history_limit)
            .min(self.config.history_limit)
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn process_turn(
        &self,
        session_id: &str,
        text: &str,
        updates: &Map<String, Value>,
    ) -> Result<TurnOutcome> {
        let checked = self
            .validator
            .validate_session_id(session_id)
            .and_then(|_| self.validator.validate_message(text));
        if let Err(e) = checked {
            self.metrics.record_rejected();
            debug!(session_id, field = e.field(), "Rejected chat input");
            return Err(e.into());
        }

        let (session, created) = self.sessions.get_or_create(session_id);
        if created {
            self.metrics.record_session_created();
            debug!(session_id, "Created session");
        }

        let outcome = session.lock().process_turn(&self.responder, text, updates);
        self.metrics.record_turn(&outcome.route);

        debug!(
            session_id,
            route = outcome.route.kind(),
            language = %outcome.language,
            total_messages = outcome.stats.total_messages,
            "Processed chat turn"
        );
        Ok(outcome)
    }

    async fn recent_history(&self, session_id: &str, limit: Option<usize>) -> Result<Vec<Exchange>> {
        self.validator.validate_session_id(session_id)?;
        let limit = self.cap_limit(limit);

        let Some(session) = self.sessions.get(session_id) else {
            return Ok(Vec::new());
        };
        let history = session.lock().recent_history(limit);
        Ok(history)
    }

    async fn clear_session(&self, session_id: &str) -> Result<()> {
        self.validator.validate_session_id(session_id)?;

        if let Some(session) = self.sessions.get(session_id) {
            session.lock().clear();
            self.metrics.record_session_cleared();
            debug!(session_id, "Cleared session");
        }
        Ok(())
    }

    fn product_catalog(&self) -> &'static ProductCatalog {
        &PRODUCT_CATALOG
    }

    fn default_session_id(&self) -> &str {
        &self.config.default_session_id
    }
}

/// 创建对话服务
pub fn create_chat_service(
    responder: Responder,
    config: ChatConfig,
    metrics: Arc<AppMetrics>,
) -> Box<dyn ChatService> {
    Box::new(ChatServiceImpl::new(responder, config, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetKind;
    use crate::dataset::pattern_table;
    use crate::error::AppError;
    use crate::models::Originator;
    use crate::services::sentiment::LexiconScorer;
    use serde_json::json;

    fn service() -> ChatServiceImpl {
        let table = pattern_table(DatasetKind::Storefront).unwrap();
        let responder = Responder::new(Arc::new(table), Arc::new(LexiconScorer));
        let config = ChatConfig {
            rng_seed: Some(11),
            ..ChatConfig::default()
        };
        ChatServiceImpl::new(responder, config, Arc::new(AppMetrics::default()))
    }

    #[tokio::test]
    async fn test_blank_message_rejected_without_mutation() {
        let service = service();
        service.process_turn("default", "Hello", &Map::new()).await.unwrap();

        let err = service.process_turn("default", "   ", &Map::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let history = service.recent_history("default", None).await.unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_input_does_not_create_session() {
        let service = service();
        assert!(service.process_turn("fresh", "", &Map::new()).await.is_err());
        assert!(service.sessions.get("fresh").is_none());
    }

    #[tokio::test]
    async fn test_invalid_session_id_rejected() {
        let service = service();
        let err = service.process_turn("no spaces", "Hello", &Map::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let service = service();
        service
            .process_turn("a", "Hello", json!({ "name": "Amina" }).as_object().unwrap())
            .await
            .unwrap();
        let outcome = service.process_turn("b", "Hello", &Map::new()).await.unwrap();

        assert!(!outcome.response.starts_with("Jambo Amina"));
        assert_eq!(outcome.stats.total_messages, 2);
        assert_eq!(service.recent_history("a", None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_history_limit_capped() {
        let service = service();
        for _ in 0..12 {
            service.process_turn("default", "Hello", &Map::new()).await.unwrap();
        }

        assert_eq!(service.recent_history("default", None).await.unwrap().len(), 20);
        assert_eq!(service.recent_history("default", Some(100)).await.unwrap().len(), 20);
        assert_eq!(service.recent_history("default", Some(0)).await.unwrap().len(), 0);

        let last = service.recent_history("default", Some(1)).await.unwrap();
        assert_eq!(last[0].originator, Originator::Bot);
    }

    #[tokio::test]
    async fn test_unknown_session_history_is_empty() {
        let service = service();
        assert!(service.recent_history("nobody", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_then_duration_is_zero() {
        let service = service();
        service.process_turn("default", "Hello", &Map::new()).await.unwrap();
        service.clear_session("default").await.unwrap();
        assert!(service.recent_history("default", None).await.unwrap().is_empty());

        let outcome = service.process_turn("default", "Hello", &Map::new()).await.unwrap();
        assert_eq!(outcome.stats.duration_seconds, 0);
        assert_eq!(outcome.stats.total_messages, 2);
    }

    #[tokio::test]
    async fn test_clear_unknown_session_is_noop() {
        let service = service();
        service.clear_session("ghost").await.unwrap();
        assert!(service.sessions.get("ghost").is_none());
    }

    #[tokio::test]
    async fn test_catalog_is_stable() {
        let service = service();
        let first = serde_json::to_value(service.product_catalog()).unwrap();
        let second = serde_json::to_value(service.product_catalog()).unwrap();
        assert_eq!(first, second);
        assert_eq!(service.default_session_id(), "default");
    }
}
