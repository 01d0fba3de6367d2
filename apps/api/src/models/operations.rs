use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::store::Entity;

// ────────────────────────────────────────────────────────────────────────────
// Attendance
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Late,
    Absent,
    Present,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub date: NaiveDate,
    /// "HH:MM", absent when the employee has not clocked in.
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub status: AttendanceStatus,
    pub shift: String,
    pub work_hours: Option<f64>,
    pub overtime: Option<f64>,
}

impl Entity for AttendanceRecord {
    const ID_PREFIX: &'static str = "ATT";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Hours beyond which a one-hour break is deducted.
const BREAK_THRESHOLD_HOURS: f64 = 6.0;
const STANDARD_DAY_HOURS: f64 = 8.0;

/// Worked hours and overtime for a clock-in/clock-out pair. Both are `None` unless both
/// times are present and parse as `HH:MM`.
pub fn work_metrics(check_in: Option<&str>, check_out: Option<&str>) -> (Option<f64>, Option<f64>) {
    let parse = |t: &str| NaiveTime::parse_from_str(t, "%H:%M").ok();
    let (Some(start), Some(end)) = (check_in.and_then(parse), check_out.and_then(parse)) else {
        return (None, None);
    };

    let mut hours = (end - start).num_minutes() as f64 / 60.0;
    if hours > BREAK_THRESHOLD_HOURS {
        hours -= 1.0;
    }
    let overtime = (hours - STANDARD_DAY_HOURS).max(0.0);
    (Some(hours), Some(overtime))
}

// ────────────────────────────────────────────────────────────────────────────
// Assets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Laptop,
    Phone,
    #[serde(rename = "ID Card")]
    IdCard,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    Available,
    Assigned,
    #[serde(rename = "In Repair")]
    InRepair,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCondition {
    New,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub serial_number: String,
    pub status: AssetStatus,
    /// Employee id of the current holder.
    pub assigned_to: Option<String>,
    pub date_assigned: Option<NaiveDate>,
    pub condition: AssetCondition,
}

impl Entity for Asset {
    const ID_PREFIX: &'static str = "ASSET";

    fn id(&self) -> &str {
        &self.id
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpdesk
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    Payroll,
    Benefits,
    Leave,
    Policy,
    Grievance,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub employee_name: String,
    pub category: TicketCategory,
    pub status: TicketStatus,
    pub created_date: NaiveDate,
}

impl Entity for Ticket {
    const ID_PREFIX: &'static str = "TKT-";

    fn id(&self) -> &str {
        &self.id
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Timesheets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimesheetStatus {
    Submitted,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: String,
    pub employee_name: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub is_billable: bool,
    pub description: String,
    pub status: TimesheetStatus,
}

impl Entity for TimesheetEntry {
    const ID_PREFIX: &'static str = "TS";

    fn id(&self) -> &str {
        &self.id
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Training,
    #[serde(rename = "Town Hall")]
    TownHall,
    Celebration,
    Holiday,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: Option<String>,
}

impl Entity for CalendarEvent {
    const ID_PREFIX: &'static str = "EVT";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_work_metrics_deducts_break_for_long_shift() {
        let (hours, overtime) = work_metrics(Some("08:55"), Some("17:05"));
        assert!(approx(hours.unwrap(), 8.0 + 10.0 / 60.0 - 1.0));
        assert_eq!(overtime, Some(0.0));
    }

    #[test]
    fn test_work_metrics_overtime_above_eight_hours() {
        let (hours, overtime) = work_metrics(Some("09:15"), Some("18:30"));
        assert!(approx(hours.unwrap(), 8.25));
        assert!(approx(overtime.unwrap(), 0.25));
    }

    #[test]
    fn test_work_metrics_short_shift_keeps_break() {
        let (hours, overtime) = work_metrics(Some("09:00"), Some("13:00"));
        assert!(approx(hours.unwrap(), 4.0));
        assert_eq!(overtime, Some(0.0));
    }

    #[test]
    fn test_work_metrics_missing_checkout() {
        assert_eq!(work_metrics(Some("09:05"), None), (None, None));
        assert_eq!(work_metrics(None, None), (None, None));
        assert_eq!(work_metrics(Some("9am"), Some("17:00")), (None, None));
    }

    #[test]
    fn test_ticket_status_wire_name() {
        let s: TicketStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(s, TicketStatus::InProgress);
    }
}
