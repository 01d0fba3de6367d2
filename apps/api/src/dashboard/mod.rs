// Dashboard: headline numbers derived from the live stores.

pub mod handlers;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::hiring::PositionStatus;
use crate::models::operations::{TicketStatus, TimesheetStatus};
use crate::models::requests::ApprovalStatus;
use crate::models::Department;
use crate::workspace::Workspace;

const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentHeadcount {
    pub department: Department,
    pub headcount: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub date: NaiveDate,
    pub headcount: usize,
    pub open_positions: usize,
    /// Leave starting after today and within the next week.
    pub upcoming_leave: usize,
    pub open_tickets: usize,
    pub pending_timesheets: usize,
    pub employees_on_travel: usize,
    pub departments: Vec<DepartmentHeadcount>,
}

pub fn insights(ws: &Workspace) -> Insights {
    let today = ws.anchor();
    let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);
    let directory = ws.directory();

    Insights {
        date: today,
        headcount: directory.len(),
        open_positions: ws
            .positions
            .store()
            .records()
            .iter()
            .filter(|p| p.status != PositionStatus::Closed)
            .count(),
        upcoming_leave: ws
            .leave
            .store()
            .records()
            .iter()
            .filter(|r| r.start_date > today && r.start_date < horizon)
            .count(),
        open_tickets: ws
            .tickets
            .store()
            .records()
            .iter()
            .filter(|t| matches!(t.status, TicketStatus::Open | TicketStatus::InProgress))
            .count(),
        pending_timesheets: ws
            .timesheets
            .store()
            .records()
            .iter()
            .filter(|e| e.status == TimesheetStatus::Submitted)
            .count(),
        employees_on_travel: ws
            .travel
            .store()
            .records()
            .iter()
            .filter(|r| {
                r.status == ApprovalStatus::Approved && r.start_date <= today && today <= r.end_date
            })
            .count(),
        departments: Department::ALL
            .iter()
            .map(|&department| DepartmentHeadcount {
                department,
                headcount: directory.iter().filter(|e| e.department == department).count(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests::{LeaveRequest, TravelRequest};
    use crate::seed::SeedData;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn workspace() -> Workspace {
        Workspace::from_seed(SeedData::build(anchor()))
    }

    #[test]
    fn test_seed_insights() {
        let insights = insights(&workspace());
        assert_eq!(insights.headcount, 5);
        assert_eq!(insights.open_positions, 4);
        // LR001 starts today, which is not "upcoming".
        assert_eq!(insights.upcoming_leave, 0);
        assert_eq!(insights.open_tickets, 2);
        assert_eq!(insights.pending_timesheets, 1);
        assert_eq!(insights.employees_on_travel, 0);
        assert!(insights.departments.iter().all(|d| d.headcount == 1));
    }

    #[test]
    fn test_upcoming_leave_window_is_exclusive() {
        let mut ws = workspace();
        for (id, offset) in [("LR101", 1), ("LR102", 6), ("LR103", 7)] {
            let request = LeaveRequest {
                id: id.to_string(),
                start_date: anchor() + Duration::days(offset),
                end_date: anchor() + Duration::days(offset),
                ..ws.leave.store().records()[0].clone()
            };
            ws.leave.store_mut().append(request).unwrap();
        }
        assert_eq!(insights(&ws).upcoming_leave, 2);
    }

    #[test]
    fn test_travel_counts_approved_trips_in_progress() {
        let mut ws = workspace();
        let trip = TravelRequest {
            id: "TR100".to_string(),
            start_date: anchor() - Duration::days(1),
            end_date: anchor(),
            ..ws.travel.store().records()[0].clone()
        };
        ws.travel.store_mut().append(trip).unwrap();
        assert_eq!(insights(&ws).employees_on_travel, 1);
    }
}
