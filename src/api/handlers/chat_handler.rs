use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::AppError,
};

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = state.session_id(request.session_id.as_deref());
    debug!(
        "Chat message: session_id={}, length={}",
        session_id,
        request.message.chars().count()
    );

    let updates = request.context.unwrap_or_default();
    let outcome = state
        .chat_service
        .process_turn(&session_id, &request.message, &updates)
        .await?;

    Ok(Json(ChatResponse::from(outcome)))
}
