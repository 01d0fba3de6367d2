//! Every page's working copy, built from seed data.

use chrono::NaiveDate;

use crate::finance::{ExpenseFilter, LoanFilter, TravelFilter};
use crate::hiring::PositionFilter;
use crate::models::hiring::{Applicant, OpenPosition};
use crate::models::operations::{
    Asset, AttendanceRecord, CalendarEvent, Project, Ticket, TimesheetEntry,
};
use crate::models::requests::{ExpenseClaim, LeaveRequest, LoanRequest, TravelRequest, WfhRequest};
use crate::models::{Alumnus, Employee};
use crate::operations::{AssetFilter, TicketFilter, TimesheetFilter};
use crate::people::{AlumniFilter, EmployeeFilter};
use crate::seed::SeedData;
use crate::store::{EntityStore, Page};
use crate::time_off::RequestFilter;

/// Criteria of listings that resolve the department cascade through the directory also
/// carry the directory revision, so an employee edit invalidates them.
pub type CascadeCriteria<F> = (u64, F);

pub struct Workspace {
    anchor: NaiveDate,
    pub employees: Page<Employee, EmployeeFilter>,
    pub alumni: Page<Alumnus, AlumniFilter>,
    pub leave: Page<LeaveRequest, CascadeCriteria<RequestFilter>>,
    pub remote_work: Page<WfhRequest, CascadeCriteria<RequestFilter>>,
    pub attendance: EntityStore<AttendanceRecord>,
    pub positions: Page<OpenPosition, PositionFilter>,
    pub applicants: EntityStore<Applicant>,
    pub assets: Page<Asset, AssetFilter>,
    pub tickets: Page<Ticket, TicketFilter>,
    pub projects: Vec<Project>,
    pub timesheets: Page<TimesheetEntry, TimesheetFilter>,
    pub travel: Page<TravelRequest, TravelFilter>,
    pub expenses: Page<ExpenseClaim, ExpenseFilter>,
    pub loans: Page<LoanRequest, LoanFilter>,
    pub calendar: EntityStore<CalendarEvent>,
}

impl Workspace {
    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            anchor: seed.anchor,
            employees: Page::new(seed.employees),
            alumni: Page::new(seed.alumni),
            leave: Page::new(seed.leave),
            remote_work: Page::new(seed.remote_work),
            attendance: EntityStore::initialize(seed.attendance),
            positions: Page::new(seed.positions),
            applicants: EntityStore::initialize(seed.applicants),
            assets: Page::new(seed.assets),
            tickets: Page::new(seed.tickets),
            projects: seed.projects,
            timesheets: Page::new(seed.timesheets),
            travel: Page::new(seed.travel),
            expenses: Page::new(seed.expenses),
            loans: Page::new(seed.loans),
            calendar: EntityStore::initialize(seed.events),
        }
    }

    /// Discards every change and reloads the fixtures for the same anchor day.
    pub fn reset(&mut self) {
        *self = Self::from_seed(SeedData::build(self.anchor));
    }

    /// The day treated as "today" by date defaults and insights.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn directory(&self) -> &[Employee] {
        self.employees.store().records()
    }

    pub fn directory_revision(&self) -> u64 {
        self.employees.store().revision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests::ApprovalStatus;

    fn workspace() -> Workspace {
        Workspace::from_seed(SeedData::build(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
    }

    #[test]
    fn test_reset_discards_changes() {
        let mut ws = workspace();
        ws.leave.store_mut().replace("LR001", |r| LeaveRequest {
            status: ApprovalStatus::Approved,
            ..r.clone()
        });
        ws.reset();
        assert_eq!(
            ws.leave.store().get("LR001").unwrap().status,
            ApprovalStatus::Pending
        );
        assert_eq!(ws.anchor(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }
}
