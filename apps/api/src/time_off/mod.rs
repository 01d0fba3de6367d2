// Time off: leave and remote-work requests, plus the attendance views that overlay them.

pub mod attendance;
pub mod handlers;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::filter::cascade::DepartmentScope;
use crate::filter::Pipeline;
use crate::models::requests::{ApprovalStatus, LeaveRequest, LeaveType, WfhRequest};
use crate::models::Employee;

pub const LEAVE_LISTING: &str = "/api/v1/leave";
pub const REMOTE_WORK_LISTING: &str = "/api/v1/remote-work";

/// Targets an approver may move a request to.
pub const DECISIONS: [ApprovalStatus; 2] = [ApprovalStatus::Approved, ApprovalStatus::Denied];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub search: String,
    pub scope: DepartmentScope,
}

pub fn list_leave(
    records: &[LeaveRequest],
    filter: &RequestFilter,
    directory: &[Employee],
) -> Vec<LeaveRequest> {
    Pipeline::<LeaveRequest>::new()
        .filter(|r: &LeaveRequest| filter.scope.admits_name(&r.employee_name, directory))
        .search(&filter.search, |r: &LeaveRequest| vec![r.employee_name.as_str()])
        .run(records)
}

pub fn list_remote_work(
    records: &[WfhRequest],
    filter: &RequestFilter,
    directory: &[Employee],
) -> Vec<WfhRequest> {
    Pipeline::<WfhRequest>::new()
        .filter(|r: &WfhRequest| filter.scope.admits_name(&r.employee_name, directory))
        .search(&filter.search, |r: &WfhRequest| vec![r.employee_name.as_str()])
        .run(records)
}

fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::Validation(
            "end_date must not be earlier than start_date".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLeaveRequest {
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewLeaveRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        ensure_ordered(self.start_date, self.end_date)
    }

    /// New requests always start out Pending.
    pub fn into_record(self, id: String, employee: &Employee) -> LeaveRequest {
        LeaveRequest {
            id,
            employee_name: employee.name.clone(),
            employee_avatar: employee.avatar.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            leave_type: self.leave_type,
            status: ApprovalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWfhRequest {
    pub employee_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

impl NewWfhRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        ensure_ordered(self.start_date, self.end_date)
    }

    pub fn into_record(self, id: String, employee: &Employee) -> WfhRequest {
        WfhRequest {
            id,
            employee_name: employee.name.clone(),
            employee_avatar: employee.avatar.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self
                .reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            status: ApprovalStatus::Pending,
        }
    }
}
