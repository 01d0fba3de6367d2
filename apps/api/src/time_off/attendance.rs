//! Attendance day view and per-employee history.
//!
//! Both views overlay leave on top of clock records: the day view shows approved leave for
//! employees who have no clock record that day, the history expands every leave request
//! into one row per day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::filter::cascade::DepartmentScope;
use crate::filter::{normalize_token, Pipeline};
use crate::models::operations::{AttendanceRecord, AttendanceStatus};
use crate::models::requests::{ApprovalStatus, LeaveRequest, LeaveType};
use crate::models::Employee;

/// One row of the day view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum DayRow {
    Attendance(AttendanceRecord),
    Leave(LeaveRequest),
}

impl DayRow {
    pub fn employee_name(&self) -> &str {
        match self {
            DayRow::Attendance(r) => &r.employee_name,
            DayRow::Leave(r) => &r.employee_name,
        }
    }
}

/// The status filter of the day view: a clock status selects attendance rows, a leave
/// type selects leave rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    Attendance(AttendanceStatus),
    Leave(LeaveType),
}

impl DayStatus {
    /// Parses the filter value, ignoring case and spaces. `None` for "all" or empty.
    pub fn parse(raw: &str) -> Result<Option<Self>, AppError> {
        let status = match normalize_token(raw).as_str() {
            "" | "all" => return Ok(None),
            "ontime" => DayStatus::Attendance(AttendanceStatus::OnTime),
            "late" => DayStatus::Attendance(AttendanceStatus::Late),
            "absent" => DayStatus::Attendance(AttendanceStatus::Absent),
            "present" => DayStatus::Attendance(AttendanceStatus::Present),
            "vacation" => DayStatus::Leave(LeaveType::Vacation),
            "sickleave" => DayStatus::Leave(LeaveType::SickLeave),
            "personal" => DayStatus::Leave(LeaveType::Personal),
            other => {
                return Err(AppError::Validation(format!(
                    "unknown attendance status '{other}'"
                )))
            }
        };
        Ok(Some(status))
    }

    pub fn admits(self, row: &DayRow) -> bool {
        match (self, row) {
            (DayStatus::Attendance(status), DayRow::Attendance(r)) => r.status == status,
            (DayStatus::Leave(leave_type), DayRow::Leave(r)) => r.leave_type == leave_type,
            _ => false,
        }
    }
}

/// Clock records of `day` followed by approved leave covering it. Leave is only added for
/// employees not already listed, so one employee never appears twice.
pub fn rows_for_day(
    attendance: &[AttendanceRecord],
    leave: &[LeaveRequest],
    day: NaiveDate,
) -> Vec<DayRow> {
    let mut rows: Vec<DayRow> = attendance
        .iter()
        .filter(|r| r.date == day)
        .cloned()
        .map(DayRow::Attendance)
        .collect();
    for request in leave
        .iter()
        .filter(|r| r.status == ApprovalStatus::Approved && r.covers(day))
    {
        if !rows.iter().any(|row| row.employee_name() == request.employee_name) {
            rows.push(DayRow::Leave(request.clone()));
        }
    }
    rows
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayFilter {
    pub search: String,
    pub scope: DepartmentScope,
    pub status: Option<DayStatus>,
}

pub fn filter_day(rows: &[DayRow], filter: &DayFilter, directory: &[Employee]) -> Vec<DayRow> {
    let mut pipeline = Pipeline::<DayRow>::new()
        .filter(|row: &DayRow| filter.scope.admits_name(row.employee_name(), directory))
        .search(&filter.search, |row: &DayRow| vec![row.employee_name()]);
    if let Some(status) = filter.status {
        pipeline = pipeline.filter(move |row: &DayRow| status.admits(row));
    }
    pipeline.run(rows)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub record: DayRow,
}

/// Every clock record of `employee_name` and one row per day of each of their leave
/// requests, whatever its status. Newest first; same-day rows keep clock records first.
pub fn history(
    employee_name: &str,
    attendance: &[AttendanceRecord],
    leave: &[LeaveRequest],
) -> Vec<HistoryRow> {
    let clock_rows = attendance
        .iter()
        .filter(|r| r.employee_name == employee_name)
        .map(|r| HistoryRow {
            date: r.date,
            record: DayRow::Attendance(r.clone()),
        });
    let leave_rows = leave
        .iter()
        .filter(|r| r.employee_name == employee_name)
        .flat_map(|r| {
            r.start_date
                .iter_days()
                .take_while(move |day| *day <= r.end_date)
                .map(move |date| HistoryRow {
                    date,
                    record: DayRow::Leave(r.clone()),
                })
        });
    let mut rows: Vec<HistoryRow> = clock_rows.chain(leave_rows).collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Choice;
    use crate::models::Department;
    use crate::seed::SeedData;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn seed() -> SeedData {
        SeedData::build(anchor())
    }

    #[test]
    fn test_day_rows_put_clock_records_first() {
        let seed = seed();
        let rows = rows_for_day(&seed.attendance, &seed.leave, anchor());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| matches!(r, DayRow::Attendance(_))));
    }

    #[test]
    fn test_day_rows_add_leave_for_absent_employees_only() {
        let seed = seed();
        let yesterday = anchor().pred_opt().unwrap();
        let rows = rows_for_day(&seed.attendance, &seed.leave, yesterday);
        // Three clock records plus Diana's approved sick day.
        assert_eq!(rows.len(), 4);
        match &rows[3] {
            DayRow::Leave(r) => assert_eq!(r.id, "LR004"),
            other => panic!("expected leave row, got {other:?}"),
        }
    }

    #[test]
    fn test_day_rows_skip_unapproved_and_duplicate_leave() {
        let seed = seed();
        let day = anchor().pred_opt().unwrap();
        let mut leave = seed.leave.clone();
        // Ethan has a clock record that day; his approved leave must not add a second row.
        leave.push(LeaveRequest {
            id: "LR900".to_string(),
            status: ApprovalStatus::Approved,
            ..seed.leave[2].clone()
        });
        let rows = rows_for_day(&seed.attendance, &leave, day);
        let ethan = rows.iter().filter(|r| r.employee_name() == "Ethan Hunt").count();
        assert_eq!(ethan, 1);
    }

    #[test]
    fn test_leave_shown_on_boundary_days() {
        let seed = seed();
        let mut leave = seed.leave.clone();
        leave[0].status = ApprovalStatus::Approved;
        for offset in [0, 5] {
            let day = anchor() + chrono::Duration::days(offset);
            let rows = rows_for_day(&[], &leave, day);
            assert!(rows.iter().any(|r| r.employee_name() == "Bob Williams"));
        }
        let after = anchor() + chrono::Duration::days(6);
        assert!(rows_for_day(&[], &leave, after).is_empty());
    }

    #[test]
    fn test_status_parse_normalizes() {
        assert_eq!(
            DayStatus::parse("On Time").unwrap(),
            Some(DayStatus::Attendance(AttendanceStatus::OnTime))
        );
        assert_eq!(
            DayStatus::parse("sick leave").unwrap(),
            Some(DayStatus::Leave(LeaveType::SickLeave))
        );
        assert_eq!(DayStatus::parse("all").unwrap(), None);
        assert!(DayStatus::parse("sleeping").is_err());
    }

    #[test]
    fn test_status_filter_selects_one_row_kind() {
        let seed = seed();
        let yesterday = anchor().pred_opt().unwrap();
        let rows = rows_for_day(&seed.attendance, &seed.leave, yesterday);

        let filter = DayFilter {
            status: Some(DayStatus::Leave(LeaveType::SickLeave)),
            ..Default::default()
        };
        let found = filter_day(&rows, &filter, &seed.employees);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employee_name(), "Diana Prince");

        let filter = DayFilter {
            status: Some(DayStatus::Attendance(AttendanceStatus::Late)),
            ..Default::default()
        };
        let found = filter_day(&rows, &filter, &seed.employees);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employee_name(), "Bob Williams");
    }

    #[test]
    fn test_day_filter_department_scope() {
        let seed = seed();
        let rows = rows_for_day(&seed.attendance, &seed.leave, anchor());
        let mut filter = DayFilter::default();
        filter.scope.set_department(Choice::Only(Department::Sales));
        let found = filter_day(&rows, &filter, &seed.employees);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].employee_name(), "Charlie Brown");
    }

    #[test]
    fn test_history_expands_leave_days_newest_first() {
        let seed = seed();
        let rows = history("Bob Williams", &seed.attendance, &seed.leave);
        // Two clock records plus six days of pending vacation.
        assert_eq!(rows.len(), 8);
        assert!(rows.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(rows[0].date, anchor() + chrono::Duration::days(5));
    }

    #[test]
    fn test_history_for_unknown_employee_is_empty() {
        let seed = seed();
        assert!(history("Nobody", &seed.attendance, &seed.leave).is_empty());
    }
}
