use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::conversation_dto::*},
    error::AppError,
};

pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = state.session_id(params.session_id.as_deref());
    debug!(
        "Getting conversation history: session_id={}, limit={:?}",
        session_id, params.limit
    );

    let history: Vec<HistoryEntry> = state
        .chat_service
        .recent_history(&session_id, params.limit)
        .await?
        .into_iter()
        .map(HistoryEntry::from)
        .collect();

    Ok(Json(history))
}

pub async fn clear_conversation(
    State(state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = state.session_id(params.session_id.as_deref());
    debug!("Clearing conversation: session_id={}", session_id);

    state.chat_service.clear_session(&session_id).await?;

    Ok(Json(ClearResponse {
        message: "Conversation cleared successfully".to_string(),
    }))
}
