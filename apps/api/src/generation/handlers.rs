//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::inflight::InflightGuard;
use crate::generation::job_description::{self, generate_job_description, JobDescriptionInput};
use crate::generation::resume_parser::{self, parse_resume};
use crate::generation::skill_suggest::{self, suggest_skills, SkillSuggestionInput};
use crate::generation::fingerprint;
use crate::models::hiring::ResumeProfile;
use crate::state::AppState;

pub const REQUEST_TOKEN_HEADER: &str = "x-request-token";

const MIN_TITLE_LEN: usize = 3;
const MIN_KEYWORDS_LEN: usize = 10;
const MIN_JOB_DESCRIPTION_LEN: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    pub resume_data_uri: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Reads the optional client-supplied request token.
pub fn request_token(headers: &HeaderMap) -> Result<Option<Uuid>, AppError> {
    let Some(raw) = headers.get(REQUEST_TOKEN_HEADER) else {
        return Ok(None);
    };
    raw.to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .map(Some)
        .ok_or_else(|| AppError::Validation(format!("{REQUEST_TOKEN_HEADER} must be a UUID")))
}

/// Echoes the request token so clients can cancel calls they did not tag themselves.
pub fn token_header(guard: &InflightGuard) -> [(HeaderName, HeaderValue); 1] {
    let value = HeaderValue::from_str(&guard.token().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static(""));
    [(HeaderName::from_static(REQUEST_TOKEN_HEADER), value)]
}

fn require_len(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Runs a resume parse under the in-flight guard. Shared with the applicant endpoints.
pub async fn guarded_parse_resume(
    state: &AppState,
    token: Option<Uuid>,
    data_uri: &str,
) -> Result<(InflightGuard, ResumeProfile), AppError> {
    let guard = state
        .inflight
        .begin(token, resume_parser::FLOW, fingerprint(resume_parser::FLOW, data_uri))?;
    let profile = guard.run(parse_resume(state.llm.as_ref(), data_uri)).await?;
    Ok((guard, profile))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generation/job-description
///
/// Drafts a Markdown job posting from a title and keywords.
pub async fn handle_job_description(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<JobDescriptionInput>,
) -> Result<impl IntoResponse, AppError> {
    let token = request_token(&headers)?;
    require_len("jobTitle", &input.job_title, MIN_TITLE_LEN)?;
    require_len("keywords", &input.keywords, MIN_KEYWORDS_LEN)?;

    let guard = state.inflight.begin(
        token,
        job_description::FLOW,
        fingerprint(job_description::FLOW, &input),
    )?;
    let output = guard
        .run(generate_job_description(
            state.llm.as_ref(),
            &input,
            &state.config.company_name,
        ))
        .await?;

    Ok((token_header(&guard), Json(output)))
}

/// POST /api/v1/generation/resume
///
/// Extracts a structured profile from a resume data URI.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ResumeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = request_token(&headers)?;
    let (guard, profile) = guarded_parse_resume(&state, token, &request.resume_data_uri).await?;
    Ok((token_header(&guard), Json(profile)))
}

/// POST /api/v1/generation/skills
///
/// Suggests skills adjacent to an employee's current ones.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<SkillSuggestionInput>,
) -> Result<impl IntoResponse, AppError> {
    let token = request_token(&headers)?;
    require_len("employeeSkills", &input.employee_skills, 1)?;
    require_len("jobDescription", &input.job_description, MIN_JOB_DESCRIPTION_LEN)?;

    let guard = state.inflight.begin(
        token,
        skill_suggest::FLOW,
        fingerprint(skill_suggest::FLOW, &input),
    )?;
    let output = guard.run(suggest_skills(state.llm.as_ref(), &input)).await?;

    Ok((token_header(&guard), Json(output)))
}

/// DELETE /api/v1/generation/requests/:token
///
/// Cancels an in-flight generation. The pending call resolves with GENERATION_CANCELLED.
pub async fn handle_cancel(
    State(state): State<AppState>,
    Path(token): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.inflight.cancel(token) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "/api/v1/generation",
            format!("No generation request {token} in flight"),
        ))
    }
}
