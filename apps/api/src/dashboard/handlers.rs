use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::dashboard::{insights, Insights};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Result<Json<Insights>, AppError> {
    let ws = state.workspace.lock().await;
    Ok(Json(insights(&ws)))
}

/// POST /api/v1/admin/reset
///
/// Reloads every store from the seed fixtures.
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    let mut ws = state.workspace.lock().await;
    ws.reset();
    info!(anchor = %ws.anchor(), "Workspace reset to seed data");
    StatusCode::NO_CONTENT
}
