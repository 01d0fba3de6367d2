//! Performance overview: score bands, company KPIs and per-department averages.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::filter::{Choice, Pipeline};
use crate::models::{Department, Employee, ReviewCycle};

const TOP_PERFORMER_SCORE: f64 = 4.5;
const NEEDS_SUPPORT_SCORE: f64 = 3.0;

/// Score buckets offered by the performance screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    #[serde(rename = "1-2")]
    Low,
    #[serde(rename = "3")]
    Middle,
    #[serde(rename = "4-5")]
    High,
}

impl ScoreBand {
    pub fn contains(self, score: f64) -> bool {
        match self {
            ScoreBand::Low => score <= 2.0,
            ScoreBand::Middle => score == 3.0,
            ScoreBand::High => score >= 4.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceFilter {
    pub search: String,
    pub department: Choice<Department>,
    pub score: Choice<ScoreBand>,
}

pub fn list_performance(records: &[Employee], filter: &PerformanceFilter) -> Vec<Employee> {
    Pipeline::<Employee>::new()
        .matching(&filter.department, |e: &Employee, d: &Department| {
            e.department == *d
        })
        .matching(&filter.score, |e: &Employee, band: &ScoreBand| {
            band.contains(e.performance.score)
        })
        .search(&filter.search, |e: &Employee| vec![e.name.as_str()])
        .run(records)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceKpis {
    /// Rounded to two decimals; 0 for an empty directory.
    pub average_score: f64,
    pub top_performers: usize,
    pub needs_support: usize,
    pub reviews_due: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentScore {
    pub department: Department,
    pub average_score: f64,
    pub headcount: usize,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Next review date implied by the cycle.
pub fn next_review(employee: &Employee) -> NaiveDate {
    let months = match employee.performance.review_cycle {
        ReviewCycle::Quarterly => 3,
        ReviewCycle::Annual => 12,
    };
    let last = employee.performance.last_review_date;
    last.checked_add_months(Months::new(months)).unwrap_or(last)
}

/// KPIs over the whole directory, independent of the listing filter.
pub fn kpis(directory: &[Employee], today: NaiveDate) -> PerformanceKpis {
    let total: f64 = directory.iter().map(|e| e.performance.score).sum();
    let average_score = if directory.is_empty() {
        0.0
    } else {
        round2(total / directory.len() as f64)
    };
    PerformanceKpis {
        average_score,
        top_performers: directory
            .iter()
            .filter(|e| e.performance.score >= TOP_PERFORMER_SCORE)
            .count(),
        needs_support: directory
            .iter()
            .filter(|e| e.performance.score < NEEDS_SUPPORT_SCORE)
            .count(),
        reviews_due: directory
            .iter()
            .filter(|e| next_review(e) <= today)
            .count(),
    }
}

/// Average score per department, in `Department::ALL` order; departments without staff
/// are omitted.
pub fn department_scores(directory: &[Employee]) -> Vec<DepartmentScore> {
    Department::ALL
        .iter()
        .filter_map(|&department| {
            let scores: Vec<f64> = directory
                .iter()
                .filter(|e| e.department == department)
                .map(|e| e.performance.score)
                .collect();
            if scores.is_empty() {
                return None;
            }
            Some(DepartmentScore {
                department,
                average_score: round2(scores.iter().sum::<f64>() / scores.len() as f64),
                headcount: scores.len(),
            })
        })
        .collect()
}
