use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Department;
use crate::store::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    Open,
    Interviewing,
    #[serde(rename = "Offer Extended")]
    OfferExtended,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenPosition {
    pub id: String,
    pub title: String,
    pub department: Department,
    pub location: String,
    pub status: PositionStatus,
    pub posted_date: NaiveDate,
    pub applicant_count: u32,
}

impl Entity for OpenPosition {
    const ID_PREFIX: &'static str = "OP";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicantStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// The fields extracted from a resume. Shared by the resume parser output and applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub resume_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    pub avatar: String,
    pub position_id: String,
    pub applied_date: NaiveDate,
    pub stage: ApplicantStage,
    pub profile: ResumeProfile,
}

impl Entity for Applicant {
    const ID_PREFIX: &'static str = "APP";

    fn id(&self) -> &str {
        &self.id
    }
}
