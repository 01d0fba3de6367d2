use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::filter::{Choice, DateRange, Listing};
use crate::models::operations::{
    Asset, AssetCondition, AssetStatus, Project, Ticket, TicketCategory, TicketStatus,
    TimesheetEntry, TimesheetStatus,
};
use crate::models::{ensure_target, StatusChange};
use crate::operations::{
    issue_asset, list_assets, list_tickets, list_timesheets, return_asset, AssetFilter,
    NewTicket, NewTimesheetEntry, TicketFilter, TimesheetFilter, ASSETS_LISTING,
    TICKETS_LISTING, TIMESHEETS_LISTING, TIMESHEET_DECISIONS,
};
use crate::people::resolve_employee;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssetQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub condition: Choice<AssetCondition>,
    #[serde(default)]
    pub status: Choice<AssetStatus>,
}

#[derive(Debug, Deserialize)]
pub struct IssueAsset {
    pub employee_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReturnAsset {
    pub condition: AssetCondition,
}

#[derive(Debug, Deserialize)]
pub struct TicketQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<TicketStatus>,
    #[serde(default)]
    pub category: Choice<TicketCategory>,
}

#[derive(Debug, Deserialize)]
pub struct TimesheetQuery {
    #[serde(default)]
    pub employee: Choice<String>,
    #[serde(default)]
    pub project: Choice<String>,
    #[serde(default)]
    pub status: Choice<TimesheetStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct TimesheetListing {
    #[serde(flatten)]
    pub listing: Listing<TimesheetEntry>,
    /// Lookup table for the entries' `project_id`.
    pub projects: Vec<Project>,
}

fn asset_not_found(id: &str) -> AppError {
    AppError::not_found(ASSETS_LISTING, format!("Asset {id} not found"))
}

// ────────────────────────────────────────────────────────────────────────────
// Assets
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assets
pub async fn handle_list_assets(
    State(state): State<AppState>,
    Query(q): Query<AssetQuery>,
) -> Result<Json<Listing<Asset>>, AppError> {
    let filter = AssetFilter {
        search: q.search,
        condition: q.condition,
        status: q.status,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .assets
        .visible(filter, |records, filter| list_assets(records, filter));
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/assets/:id/issue
pub async fn handle_issue_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<IssueAsset>,
) -> Result<Json<Asset>, AppError> {
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let holder = resolve_employee(ws.employees.store().records(), &body.employee_id)?;
    let asset = ws.assets.store().get(&id).ok_or_else(|| asset_not_found(&id))?;
    let issued = issue_asset(asset, holder, ws.anchor())?;
    ws.assets.store_mut().replace(&id, |_| issued.clone());
    info!(id = %issued.id, holder = %holder.id, "Asset issued");
    Ok(Json(issued))
}

/// POST /api/v1/assets/:id/return
pub async fn handle_return_asset(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ReturnAsset>,
) -> Result<Json<Asset>, AppError> {
    let mut ws = state.workspace.lock().await;
    let asset = ws.assets.store().get(&id).ok_or_else(|| asset_not_found(&id))?;
    let returned = return_asset(asset, body.condition)?;
    ws.assets.store_mut().replace(&id, |_| returned.clone());
    info!(id = %returned.id, condition = ?returned.condition, "Asset returned");
    Ok(Json(returned))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpdesk
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tickets
pub async fn handle_list_tickets(
    State(state): State<AppState>,
    Query(q): Query<TicketQuery>,
) -> Result<Json<Listing<Ticket>>, AppError> {
    let filter = TicketFilter {
        search: q.search,
        status: q.status,
        category: q.category,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .tickets
        .visible(filter, |records, filter| list_tickets(records, filter));
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/tickets
pub async fn handle_create_ticket(
    State(state): State<AppState>,
    Json(body): Json<NewTicket>,
) -> Result<(StatusCode, Json<Ticket>), AppError> {
    body.validate()?;
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let today = ws.anchor();
    let employee = resolve_employee(ws.employees.store().records(), &body.employee_id)?;
    let record = ws
        .tickets
        .store_mut()
        .append_new(|id| body.into_record(id, employee, today))
        .clone();
    info!(id = %record.id, category = ?record.category, "Ticket opened");
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/tickets/:id/status
pub async fn handle_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<TicketStatus>>,
) -> Result<Json<Ticket>, AppError> {
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .tickets
        .store_mut()
        .replace(&id, |t| Ticket {
            status: change.status,
            ..t.clone()
        })
        .cloned()
        .ok_or_else(|| AppError::not_found(TICKETS_LISTING, format!("Ticket {id} not found")))?;
    info!(id = %updated.id, status = ?updated.status, "Ticket status changed");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Timesheets
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/timesheets
pub async fn handle_list_timesheets(
    State(state): State<AppState>,
    Query(q): Query<TimesheetQuery>,
) -> Result<Json<TimesheetListing>, AppError> {
    let filter = TimesheetFilter {
        employee: q.employee,
        project: q.project,
        status: q.status,
        range: DateRange::checked(q.from, q.to)?,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .timesheets
        .visible(filter, |records, filter| list_timesheets(records, filter));
    Ok(Json(TimesheetListing {
        listing: Listing::new(items),
        projects: ws.projects.clone(),
    }))
}

/// POST /api/v1/timesheets
pub async fn handle_create_timesheet(
    State(state): State<AppState>,
    Json(body): Json<NewTimesheetEntry>,
) -> Result<(StatusCode, Json<TimesheetEntry>), AppError> {
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    body.validate(&ws.projects)?;
    let employee = resolve_employee(ws.employees.store().records(), &body.employee_id)?;
    let record = ws
        .timesheets
        .store_mut()
        .append_new(|id| body.into_record(id, employee))
        .clone();
    info!(id = %record.id, hours = record.hours, "Time logged");
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/timesheets/:id/status
///
/// Approves or rejects an entry.
pub async fn handle_timesheet_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<TimesheetStatus>>,
) -> Result<Json<TimesheetEntry>, AppError> {
    let status = ensure_target(change.status, &TIMESHEET_DECISIONS)?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .timesheets
        .store_mut()
        .replace(&id, |e| TimesheetEntry {
            status,
            ..e.clone()
        })
        .cloned()
        .ok_or_else(|| {
            AppError::not_found(TIMESHEETS_LISTING, format!("Timesheet entry {id} not found"))
        })?;
    info!(id = %updated.id, status = ?updated.status, "Timesheet entry decided");
    Ok(Json(updated))
}
