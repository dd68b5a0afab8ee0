use crate::services::chat::ChatService;
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Chat service for turns, history and the catalog
    pub chat_service: Arc<dyn ChatService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chat_service", &"Arc<dyn ChatService>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(chat_service: Box<dyn ChatService>) -> Self {
        Self {
            chat_service: Arc::from(chat_service),
        }
    }

    /// Resolve the session a request addresses
    pub fn session_id(&self, requested: Option<&str>) -> String {
        requested
            .unwrap_or_else(|| self.chat_service.default_session_id())
            .to_string()
    }
}
