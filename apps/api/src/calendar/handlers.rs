use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::calendar::{calendar_view, CalendarView, NewEvent};
use crate::errors::AppError;
use crate::models::operations::CalendarEvent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Defaults to the anchor day.
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/calendar
pub async fn handle_calendar(
    State(state): State<AppState>,
    Query(q): Query<CalendarQuery>,
) -> Result<Json<CalendarView>, AppError> {
    let ws = state.workspace.lock().await;
    let date = q.date.unwrap_or_else(|| ws.anchor());
    Ok(Json(calendar_view(ws.calendar.records(), date)))
}

/// POST /api/v1/calendar/events
///
/// Adds an event and re-sorts the calendar by date.
pub async fn handle_create_event(
    State(state): State<AppState>,
    Json(body): Json<NewEvent>,
) -> Result<(StatusCode, Json<CalendarEvent>), AppError> {
    body.validate()?;
    let mut ws = state.workspace.lock().await;
    let record = ws.calendar.append_new(|id| body.into_record(id)).clone();
    ws.calendar.sort_by_key(|e| e.date);
    info!(id = %record.id, date = %record.date, "Calendar event created");
    Ok((StatusCode::CREATED, Json(record)))
}
