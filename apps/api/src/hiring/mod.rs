// Hiring: open positions and their applicant pipelines.

pub mod handlers;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::filter::{normalize_token, Choice, Pipeline};
use crate::models::employee::placeholder_avatar;
use crate::models::hiring::{
    Applicant, ApplicantStage, OpenPosition, PositionStatus, ResumeProfile,
};
use crate::models::Department;

pub const POSITIONS_LISTING: &str = "/api/v1/positions";

const MIN_TITLE_LEN: usize = 3;
const MIN_LOCATION_LEN: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionFilter {
    pub search: String,
    pub department: Choice<Department>,
    /// Compared after `normalize_token`, so "New York, NY" matches "newyorkny".
    pub location: Choice<String>,
}

/// Filtered positions, newest posting first.
pub fn list_positions(records: &[OpenPosition], filter: &PositionFilter) -> Vec<OpenPosition> {
    let location = filter.location.as_only().map(|l| normalize_token(l));
    let mut items = Pipeline::<OpenPosition>::new()
        .search(&filter.search, |p: &OpenPosition| vec![p.title.as_str()])
        .matching(&filter.department, |p: &OpenPosition, d: &Department| {
            p.department == *d
        })
        .filter(|p: &OpenPosition| {
            location
                .as_deref()
                .map_or(true, |l| normalize_token(&p.location) == l)
        })
        .run(records);
    items.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    items
}

fn require_len(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPosition {
    pub title: String,
    pub department: Department,
    pub location: String,
}

impl NewPosition {
    pub fn validate(&self) -> Result<(), AppError> {
        require_len("title", &self.title, MIN_TITLE_LEN)?;
        require_len("location", &self.location, MIN_LOCATION_LEN)
    }

    pub fn into_record(self, id: String, today: NaiveDate) -> OpenPosition {
        OpenPosition {
            id,
            title: self.title.trim().to_string(),
            department: self.department,
            location: self.location.trim().to_string(),
            status: PositionStatus::Open,
            posted_date: today,
            applicant_count: 0,
        }
    }
}

/// Checks the fields a human needs to contact the applicant. Parsed resumes are already
/// shape-checked; this covers records posted by hand.
pub fn validate_profile(profile: &ResumeProfile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if !profile.email.contains('@') {
        return Err(AppError::Validation("email must be an email address".to_string()));
    }
    Ok(())
}

pub fn new_applicant(
    id: String,
    position_id: &str,
    profile: ResumeProfile,
    today: NaiveDate,
) -> Applicant {
    Applicant {
        id,
        avatar: placeholder_avatar(&profile.name),
        position_id: position_id.to_string(),
        applied_date: today,
        stage: ApplicantStage::Applied,
        profile,
    }
}

pub fn applicants_for<'a>(
    applicants: &'a [Applicant],
    position_id: &'a str,
) -> impl Iterator<Item = &'a Applicant> + 'a {
    applicants.iter().filter(move |a| a.position_id == position_id)
}
