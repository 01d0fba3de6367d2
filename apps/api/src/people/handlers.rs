use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::filter::cascade::{EmployeeSelect, ScopedQuery};
use crate::filter::{Choice, Listing};
use crate::models::{Alumnus, ContactChannel, Department, Employee};
use crate::people::performance::{
    department_scores, kpis, list_performance, DepartmentScore, PerformanceFilter,
    PerformanceKpis, ScoreBand,
};
use crate::people::{
    list_alumni, list_employees, AlumniFilter, EmployeeEdit, EmployeeFilter, NewAlumnus,
    ALUMNI_LISTING, EMPLOYEES_LISTING,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PerformanceQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Choice<Department>,
    #[serde(default)]
    pub score: Choice<ScoreBand>,
}

#[derive(Debug, Deserialize)]
pub struct AlumniQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Choice<Department>,
    #[serde(default)]
    pub contact_for: Choice<ContactChannel>,
}

#[derive(Serialize)]
pub struct PerformanceResponse {
    #[serde(flatten)]
    pub listing: Listing<Employee>,
    pub kpis: PerformanceKpis,
    pub departments: Vec<DepartmentScore>,
}

fn employee_not_found(id: &str) -> AppError {
    AppError::not_found(EMPLOYEES_LISTING, format!("Employee {id} not found"))
}

/// GET /api/v1/employees
pub async fn handle_list_employees(
    State(state): State<AppState>,
    Query(q): Query<ScopedQuery>,
) -> Result<Json<Listing<Employee>>, AppError> {
    let mut ws = state.workspace.lock().await;
    let filter = EmployeeFilter {
        search: q.search.clone(),
        scope: q.scope(ws.directory(), EmployeeSelect::Independent),
    };
    let items = ws
        .employees
        .visible(filter, |records, filter| list_employees(records, filter));
    Ok(Json(Listing::new(items)))
}

/// GET /api/v1/employees/:id
pub async fn handle_get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let ws = state.workspace.lock().await;
    ws.employees
        .store()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| employee_not_found(&id))
}

/// PUT /api/v1/employees/:id
///
/// Updates the editable profile fields. Skills and performance are left as they are.
pub async fn handle_update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(edit): Json<EmployeeEdit>,
) -> Result<Json<Employee>, AppError> {
    edit.validate()?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .employees
        .store_mut()
        .replace(&id, |e| edit.apply(e))
        .cloned()
        .ok_or_else(|| employee_not_found(&id))?;
    info!(id = %updated.id, department = ?updated.department, "Employee profile updated");
    Ok(Json(updated))
}

/// GET /api/v1/performance
///
/// Filtered listing plus KPIs computed over the whole directory.
pub async fn handle_performance(
    State(state): State<AppState>,
    Query(q): Query<PerformanceQuery>,
) -> Result<Json<PerformanceResponse>, AppError> {
    let ws = state.workspace.lock().await;
    let filter = PerformanceFilter {
        search: q.search,
        department: q.department,
        score: q.score,
    };
    let directory = ws.directory();
    Ok(Json(PerformanceResponse {
        listing: Listing::new(list_performance(directory, &filter)),
        kpis: kpis(directory, ws.anchor()),
        departments: department_scores(directory),
    }))
}

/// GET /api/v1/alumni
pub async fn handle_list_alumni(
    State(state): State<AppState>,
    Query(q): Query<AlumniQuery>,
) -> Result<Json<Listing<Alumnus>>, AppError> {
    let filter = AlumniFilter {
        search: q.search,
        department: q.department,
        contact_for: q.contact_for,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .alumni
        .visible(filter, |records, filter| list_alumni(records, filter));
    Ok(Json(Listing::new(items)))
}

/// GET /api/v1/alumni/:id
pub async fn handle_get_alumnus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alumnus>, AppError> {
    let ws = state.workspace.lock().await;
    ws.alumni
        .store()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(ALUMNI_LISTING, format!("Alumnus {id} not found")))
}

/// POST /api/v1/alumni
pub async fn handle_add_alumnus(
    State(state): State<AppState>,
    Json(body): Json<NewAlumnus>,
) -> Result<(StatusCode, Json<Alumnus>), AppError> {
    body.validate()?;
    let mut ws = state.workspace.lock().await;
    let record = ws
        .alumni
        .store_mut()
        .append_new(|id| body.into_record(id))
        .clone();
    info!(id = %record.id, "Alumnus added");
    Ok((StatusCode::CREATED, Json(record)))
}
