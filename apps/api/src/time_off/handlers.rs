use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::filter::cascade::{EmployeeSelect, ScopedQuery};
use crate::filter::{Choice, Listing};
use crate::models::requests::{ApprovalStatus, LeaveRequest, WfhRequest};
use crate::models::{ensure_target, Department, StatusChange};
use crate::people::{resolve_employee, EMPLOYEES_LISTING};
use crate::state::AppState;
use crate::time_off::attendance::{
    filter_day, history, rows_for_day, DayFilter, DayRow, DayStatus, HistoryRow,
};
use crate::time_off::{
    list_leave, list_remote_work, NewLeaveRequest, NewWfhRequest, RequestFilter, DECISIONS,
    LEAVE_LISTING, REMOTE_WORK_LISTING,
};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    /// Defaults to the anchor day.
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Choice<Department>,
    #[serde(default)]
    pub employee: Choice<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Serialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub listing: Listing<DayRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Leave
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/leave
pub async fn handle_list_leave(
    State(state): State<AppState>,
    Query(q): Query<ScopedQuery>,
) -> Result<Json<Listing<LeaveRequest>>, AppError> {
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let filter = RequestFilter {
        search: q.search.clone(),
        scope: q.scope(ws.directory(), EmployeeSelect::RequiresDepartment),
    };
    let criteria = (ws.directory_revision(), filter);
    let directory = ws.employees.store().records();
    let items = ws.leave.visible(criteria, |records, criteria| {
        list_leave(records, &criteria.1, directory)
    });
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/leave
pub async fn handle_create_leave(
    State(state): State<AppState>,
    Json(body): Json<NewLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    body.validate()?;
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let employee = resolve_employee(ws.employees.store().records(), &body.employee_id)?;
    let record = ws
        .leave
        .store_mut()
        .append_new(|id| body.into_record(id, employee))
        .clone();
    info!(id = %record.id, employee = %record.employee_name, "Leave request submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/leave/:id/status
///
/// Approves or denies a request.
pub async fn handle_leave_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<ApprovalStatus>>,
) -> Result<Json<LeaveRequest>, AppError> {
    let status = ensure_target(change.status, &DECISIONS)?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .leave
        .store_mut()
        .replace(&id, |r| LeaveRequest {
            status,
            ..r.clone()
        })
        .cloned()
        .ok_or_else(|| AppError::not_found(LEAVE_LISTING, format!("Leave request {id} not found")))?;
    info!(id = %updated.id, status = ?updated.status, "Leave request decided");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Remote work
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/remote-work
pub async fn handle_list_remote_work(
    State(state): State<AppState>,
    Query(q): Query<ScopedQuery>,
) -> Result<Json<Listing<WfhRequest>>, AppError> {
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let filter = RequestFilter {
        search: q.search.clone(),
        scope: q.scope(ws.directory(), EmployeeSelect::Independent),
    };
    let criteria = (ws.directory_revision(), filter);
    let directory = ws.employees.store().records();
    let items = ws.remote_work.visible(criteria, |records, criteria| {
        list_remote_work(records, &criteria.1, directory)
    });
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/remote-work
pub async fn handle_create_remote_work(
    State(state): State<AppState>,
    Json(body): Json<NewWfhRequest>,
) -> Result<(StatusCode, Json<WfhRequest>), AppError> {
    body.validate()?;
    let mut guard = state.workspace.lock().await;
    let ws = &mut *guard;
    let employee = resolve_employee(ws.employees.store().records(), &body.employee_id)?;
    let record = ws
        .remote_work
        .store_mut()
        .append_new(|id| body.into_record(id, employee))
        .clone();
    info!(id = %record.id, employee = %record.employee_name, "Remote work request submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/v1/remote-work/:id/status
pub async fn handle_remote_work_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<ApprovalStatus>>,
) -> Result<Json<WfhRequest>, AppError> {
    let status = ensure_target(change.status, &DECISIONS)?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .remote_work
        .store_mut()
        .replace(&id, |r| WfhRequest {
            status,
            ..r.clone()
        })
        .cloned()
        .ok_or_else(|| {
            AppError::not_found(
                REMOTE_WORK_LISTING,
                format!("Remote work request {id} not found"),
            )
        })?;
    info!(id = %updated.id, status = ?updated.status, "Remote work request decided");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Attendance
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/attendance
///
/// Clock records of one day with approved leave filling in for absent employees.
pub async fn handle_attendance_day(
    State(state): State<AppState>,
    Query(q): Query<AttendanceQuery>,
) -> Result<Json<AttendanceDay>, AppError> {
    let status = DayStatus::parse(&q.status)?;
    let ws = state.workspace.lock().await;
    let date = q.date.unwrap_or_else(|| ws.anchor());
    let directory = ws.directory();
    let scope = ScopedQuery {
        search: q.search,
        department: q.department,
        employee: q.employee,
    };
    let filter = DayFilter {
        scope: scope.scope(directory, EmployeeSelect::Independent),
        search: scope.search,
        status,
    };
    let rows = rows_for_day(
        ws.attendance.records(),
        ws.leave.store().records(),
        date,
    );
    Ok(Json(AttendanceDay {
        date,
        listing: Listing::new(filter_day(&rows, &filter, directory)),
    }))
}

/// GET /api/v1/attendance/history/:employee_id
pub async fn handle_attendance_history(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Listing<HistoryRow>>, AppError> {
    let ws = state.workspace.lock().await;
    let employee = ws.employees.store().get(&employee_id).ok_or_else(|| {
        AppError::not_found(EMPLOYEES_LISTING, format!("Employee {employee_id} not found"))
    })?;
    let rows = history(
        &employee.name,
        ws.attendance.records(),
        ws.leave.store().records(),
    );
    Ok(Json(Listing::new(rows)))
}
