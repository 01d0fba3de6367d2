use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::filter::{Choice, Listing};
use crate::generation::handlers::{
    guarded_parse_resume, request_token, token_header, ResumeRequest,
};
use crate::generation::resume_parser::data_uri;
use crate::hiring::{
    applicants_for, list_positions, new_applicant, validate_profile, NewPosition,
    PositionFilter, POSITIONS_LISTING,
};
use crate::models::hiring::{Applicant, ApplicantStage, OpenPosition, ResumeProfile};
use crate::models::{Department, StatusChange};
use crate::state::AppState;
use crate::workspace::Workspace;

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Choice<Department>,
    #[serde(default)]
    pub location: Choice<String>,
}

#[derive(Serialize)]
pub struct PositionDetail {
    pub position: OpenPosition,
    pub applicants: Vec<Applicant>,
}

fn position_not_found(id: &str) -> AppError {
    AppError::not_found(POSITIONS_LISTING, format!("Position {id} not found"))
}

fn ensure_position(ws: &Workspace, position_id: &str) -> Result<(), AppError> {
    ws.positions
        .store()
        .get(position_id)
        .map(|_| ())
        .ok_or_else(|| position_not_found(position_id))
}

/// Files a new applicant under `position_id` and bumps the position's applicant count.
fn admit_applicant(
    ws: &mut Workspace,
    position_id: &str,
    profile: ResumeProfile,
) -> Result<Applicant, AppError> {
    ensure_position(ws, position_id)?;
    let today = ws.anchor();
    let applicant = ws
        .applicants
        .append_new(|id| new_applicant(id, position_id, profile, today))
        .clone();
    ws.positions.store_mut().replace(position_id, |p| OpenPosition {
        applicant_count: p.applicant_count + 1,
        ..p.clone()
    });
    info!(id = %applicant.id, position = %position_id, "Applicant added");
    Ok(applicant)
}

// ────────────────────────────────────────────────────────────────────────────
// Positions
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/positions
pub async fn handle_list_positions(
    State(state): State<AppState>,
    Query(q): Query<PositionQuery>,
) -> Result<Json<Listing<OpenPosition>>, AppError> {
    let filter = PositionFilter {
        search: q.search,
        department: q.department,
        location: q.location,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .positions
        .visible(filter, |records, filter| list_positions(records, filter));
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/positions
pub async fn handle_create_position(
    State(state): State<AppState>,
    Json(body): Json<NewPosition>,
) -> Result<(StatusCode, Json<OpenPosition>), AppError> {
    body.validate()?;
    let mut ws = state.workspace.lock().await;
    let today = ws.anchor();
    let record = ws
        .positions
        .store_mut()
        .append_new(|id| body.into_record(id, today))
        .clone();
    info!(id = %record.id, title = %record.title, "Position opened");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/positions/:id
pub async fn handle_get_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PositionDetail>, AppError> {
    let ws = state.workspace.lock().await;
    let position = ws
        .positions
        .store()
        .get(&id)
        .cloned()
        .ok_or_else(|| position_not_found(&id))?;
    let applicants = applicants_for(ws.applicants.records(), &id)
        .cloned()
        .collect();
    Ok(Json(PositionDetail {
        position,
        applicants,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Applicants
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/positions/:id/applicants
///
/// Adds an applicant from an already parsed resume record.
pub async fn handle_add_applicant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(profile): Json<ResumeProfile>,
) -> Result<(StatusCode, Json<Applicant>), AppError> {
    validate_profile(&profile)?;
    let mut ws = state.workspace.lock().await;
    let applicant = admit_applicant(&mut ws, &id, profile)?;
    Ok((StatusCode::CREATED, Json(applicant)))
}

/// Parses the resume without holding the workspace lock, then files the applicant.
async fn add_from_data_uri(
    state: &AppState,
    headers: &HeaderMap,
    position_id: &str,
    uri: &str,
) -> Result<impl IntoResponse, AppError> {
    ensure_position(&*state.workspace.lock().await, position_id)?;
    let token = request_token(headers)?;
    let (guard, profile) = guarded_parse_resume(state, token, uri).await?;
    let applicant = {
        let mut ws = state.workspace.lock().await;
        admit_applicant(&mut ws, position_id, profile)?
    };
    Ok((StatusCode::CREATED, token_header(&guard), Json(applicant)))
}

/// POST /api/v1/positions/:id/applicants/resume
pub async fn handle_add_applicant_from_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<ResumeRequest>,
) -> Result<impl IntoResponse, AppError> {
    add_from_data_uri(&state, &headers, &id, &request.resume_data_uri).await
}

/// POST /api/v1/positions/:id/applicants/upload
///
/// Multipart upload; the `resume` field's bytes and content type become a data URI.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let media_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read resume upload: {e}")))?;
        upload = Some(data_uri(&media_type, &bytes));
        break;
    }
    let Some(uri) = upload else {
        warn!(position = %id, "Resume upload without a '{RESUME_FIELD}' field");
        return Err(AppError::Validation(format!(
            "multipart field '{RESUME_FIELD}' is required"
        )));
    };
    add_from_data_uri(&state, &headers, &id, &uri).await
}

/// GET /api/v1/positions/:id/applicants/:applicant_id
pub async fn handle_get_applicant(
    State(state): State<AppState>,
    Path((position_id, applicant_id)): Path<(String, String)>,
) -> Result<Json<Applicant>, AppError> {
    let ws = state.workspace.lock().await;
    ws.applicants
        .get(&applicant_id)
        .filter(|a| a.position_id == position_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| applicant_not_found(&position_id, &applicant_id))
}

fn applicant_not_found(position_id: &str, applicant_id: &str) -> AppError {
    AppError::not_found(
        POSITIONS_LISTING,
        format!("Applicant {applicant_id} not found for position {position_id}"),
    )
}

/// POST /api/v1/positions/:id/applicants/:applicant_id/stage
///
/// Moves the applicant to any pipeline stage.
pub async fn handle_applicant_stage(
    State(state): State<AppState>,
    Path((position_id, applicant_id)): Path<(String, String)>,
    Json(change): Json<StatusChange<ApplicantStage>>,
) -> Result<Json<Applicant>, AppError> {
    let mut ws = state.workspace.lock().await;
    let belongs = ws
        .applicants
        .get(&applicant_id)
        .is_some_and(|a| a.position_id == position_id);
    if !belongs {
        return Err(applicant_not_found(&position_id, &applicant_id));
    }
    let updated = ws
        .applicants
        .replace(&applicant_id, |a| Applicant {
            stage: change.status,
            ..a.clone()
        })
        .cloned()
        .ok_or_else(|| applicant_not_found(&position_id, &applicant_id))?;
    info!(id = %updated.id, stage = ?updated.stage, "Applicant stage changed");
    Ok(Json(updated))
}
