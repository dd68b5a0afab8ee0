use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::api::app_state::AppState;

pub async fn get_products(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.chat_service.product_catalog();
    debug!("Listing product catalog: {} products", catalog.product_count());
    Json(catalog)
}
