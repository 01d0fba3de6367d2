// Operations: asset custody, the helpdesk queue and project timesheets.

pub mod handlers;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::filter::{Choice, DateRange, Pipeline};
use crate::models::operations::{
    Asset, AssetCondition, AssetStatus, Project, Ticket, TicketCategory, TicketStatus,
    TimesheetEntry, TimesheetStatus,
};
use crate::models::Employee;

pub const ASSETS_LISTING: &str = "/api/v1/assets";
pub const TICKETS_LISTING: &str = "/api/v1/tickets";
pub const TIMESHEETS_LISTING: &str = "/api/v1/timesheets";

/// Targets an approver may move a timesheet entry to.
pub const TIMESHEET_DECISIONS: [TimesheetStatus; 2] =
    [TimesheetStatus::Approved, TimesheetStatus::Rejected];

const MAX_DAILY_HOURS: f64 = 24.0;

// ────────────────────────────────────────────────────────────────────────────
// Assets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub search: String,
    pub condition: Choice<AssetCondition>,
    pub status: Choice<AssetStatus>,
}

pub fn list_assets(records: &[Asset], filter: &AssetFilter) -> Vec<Asset> {
    Pipeline::<Asset>::new()
        .search(&filter.search, |a: &Asset| {
            vec![a.name.as_str(), a.serial_number.as_str()]
        })
        .matching(&filter.condition, |a: &Asset, c: &AssetCondition| {
            a.condition == *c
        })
        .matching(&filter.status, |a: &Asset, s: &AssetStatus| a.status == *s)
        .run(records)
}

fn ensure_asset_status(asset: &Asset, expected: AssetStatus, action: &str) -> Result<(), AppError> {
    if asset.status != expected {
        return Err(AppError::Conflict(format!(
            "asset {} is {:?}; only {:?} assets can be {action}",
            asset.id, asset.status, expected
        )));
    }
    Ok(())
}

/// Hands an available asset to `holder`.
pub fn issue_asset(asset: &Asset, holder: &Employee, today: NaiveDate) -> Result<Asset, AppError> {
    ensure_asset_status(asset, AssetStatus::Available, "issued")?;
    Ok(Asset {
        status: AssetStatus::Assigned,
        assigned_to: Some(holder.id.clone()),
        date_assigned: Some(today),
        ..asset.clone()
    })
}

/// Takes an assigned asset back, recording the condition it came back in.
pub fn return_asset(asset: &Asset, condition: AssetCondition) -> Result<Asset, AppError> {
    ensure_asset_status(asset, AssetStatus::Assigned, "returned")?;
    Ok(Asset {
        status: AssetStatus::Available,
        assigned_to: None,
        date_assigned: None,
        condition,
        ..asset.clone()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpdesk
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub search: String,
    pub status: Choice<TicketStatus>,
    pub category: Choice<TicketCategory>,
}

pub fn list_tickets(records: &[Ticket], filter: &TicketFilter) -> Vec<Ticket> {
    Pipeline::<Ticket>::new()
        .matching(&filter.status, |t: &Ticket, s: &TicketStatus| t.status == *s)
        .matching(&filter.category, |t: &Ticket, c: &TicketCategory| {
            t.category == *c
        })
        .search(&filter.search, |t: &Ticket| vec![t.subject.as_str()])
        .run(records)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTicket {
    pub employee_id: String,
    pub subject: String,
    pub description: String,
    pub category: TicketCategory,
}

impl NewTicket {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.subject.trim().is_empty() {
            return Err(AppError::Validation("subject is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description is required".to_string()));
        }
        Ok(())
    }

    pub fn into_record(self, id: String, employee: &Employee, today: NaiveDate) -> Ticket {
        Ticket {
            id,
            subject: self.subject.trim().to_string(),
            description: self.description.trim().to_string(),
            employee_name: employee.name.clone(),
            category: self.category,
            status: TicketStatus::Open,
            created_date: today,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Timesheets
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimesheetFilter {
    /// Employee display name.
    pub employee: Choice<String>,
    /// Project id.
    pub project: Choice<String>,
    pub status: Choice<TimesheetStatus>,
    pub range: DateRange,
}

pub fn list_timesheets(records: &[TimesheetEntry], filter: &TimesheetFilter) -> Vec<TimesheetEntry> {
    Pipeline::<TimesheetEntry>::new()
        .matching(&filter.employee, |e: &TimesheetEntry, name: &String| {
            e.employee_name == *name
        })
        .matching(&filter.project, |e: &TimesheetEntry, id: &String| {
            e.project_id == *id
        })
        .matching(&filter.status, |e: &TimesheetEntry, s: &TimesheetStatus| {
            e.status == *s
        })
        .within(filter.range, |e: &TimesheetEntry| e.date)
        .run(records)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTimesheetEntry {
    pub employee_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub is_billable: bool,
    pub description: String,
}

impl NewTimesheetEntry {
    pub fn validate(&self, projects: &[Project]) -> Result<(), AppError> {
        if !(self.hours > 0.0 && self.hours <= MAX_DAILY_HOURS) {
            return Err(AppError::Validation(format!(
                "hours must be greater than 0 and at most {MAX_DAILY_HOURS}"
            )));
        }
        if !projects.iter().any(|p| p.id == self.project_id) {
            return Err(AppError::Validation(format!(
                "unknown project '{}'",
                self.project_id
            )));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation("description is required".to_string()));
        }
        Ok(())
    }

    /// Entries are logged as Submitted and wait for approval.
    pub fn into_record(self, id: String, employee: &Employee) -> TimesheetEntry {
        TimesheetEntry {
            id,
            employee_name: employee.name.clone(),
            project_id: self.project_id,
            date: self.date,
            hours: self.hours,
            is_billable: self.is_billable,
            description: self.description.trim().to_string(),
            status: TimesheetStatus::Submitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn seed() -> SeedData {
        SeedData::build(anchor())
    }

    #[test]
    fn test_asset_search_covers_serial_number() {
        let seed = seed();
        let filter = AssetFilter {
            search: "dxps15".to_string(),
            ..Default::default()
        };
        let found = list_assets(&seed.assets, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "ASSET002");
    }

    #[test]
    fn test_asset_condition_and_status_combine() {
        let seed = seed();
        let filter = AssetFilter {
            condition: Choice::Only(AssetCondition::New),
            status: Choice::Only(AssetStatus::Available),
            ..Default::default()
        };
        let ids: Vec<_> = list_assets(&seed.assets, &filter)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["ASSET002", "ASSET006"]);
    }

    #[test]
    fn test_issue_requires_available_asset() {
        let seed = seed();
        let holder = &seed.employees[1];
        let issued = issue_asset(&seed.assets[1], holder, anchor()).unwrap();
        assert_eq!(issued.status, AssetStatus::Assigned);
        assert_eq!(issued.assigned_to.as_deref(), Some("EMP002"));
        assert_eq!(issued.date_assigned, Some(anchor()));

        let err = issue_asset(&seed.assets[0], holder, anchor()).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_return_clears_holder_and_sets_condition() {
        let seed = seed();
        let returned = return_asset(&seed.assets[0], AssetCondition::Fair).unwrap();
        assert_eq!(returned.status, AssetStatus::Available);
        assert_eq!(returned.assigned_to, None);
        assert_eq!(returned.date_assigned, None);
        assert_eq!(returned.condition, AssetCondition::Fair);

        assert!(return_asset(&seed.assets[4], AssetCondition::Good).is_err());
    }

    #[test]
    fn test_ticket_filters() {
        let seed = seed();
        let filter = TicketFilter {
            status: Choice::Only(TicketStatus::Resolved),
            search: "wfh".to_string(),
            ..Default::default()
        };
        let found = list_tickets(&seed.tickets, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "TKT-004");
    }

    #[test]
    fn test_new_ticket_opens_today() {
        let seed = seed();
        let ticket = NewTicket {
            employee_id: "EMP003".to_string(),
            subject: "Payslip missing".to_string(),
            description: "June payslip is not in the portal.".to_string(),
            category: TicketCategory::Payroll,
        };
        ticket.validate().unwrap();
        let record = ticket.into_record("TKT-005".to_string(), &seed.employees[2], anchor());
        assert_eq!(record.status, TicketStatus::Open);
        assert_eq!(record.employee_name, "Charlie Brown");
        assert_eq!(record.created_date, anchor());
    }

    #[test]
    fn test_timesheet_range_is_point_containment() {
        let seed = seed();
        let filter = TimesheetFilter {
            range: DateRange::between(anchor() - chrono::Duration::days(2), anchor()),
            ..Default::default()
        };
        let ids: Vec<_> = list_timesheets(&seed.timesheets, &filter)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["TS001", "TS002", "TS003"]);
    }

    #[test]
    fn test_timesheet_employee_and_project_filters() {
        let seed = seed();
        let filter = TimesheetFilter {
            employee: Choice::Only("Alice Johnson".to_string()),
            project: Choice::Only("PROJ-02".to_string()),
            ..Default::default()
        };
        let found = list_timesheets(&seed.timesheets, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "TS004");
    }

    #[test]
    fn test_timesheet_hours_bounds() {
        let seed = seed();
        let entry = |hours: f64| NewTimesheetEntry {
            employee_id: "EMP001".to_string(),
            project_id: "PROJ-01".to_string(),
            date: anchor(),
            hours,
            is_billable: true,
            description: "Pairing".to_string(),
        };
        assert!(entry(0.0).validate(&seed.projects).is_err());
        assert!(entry(24.5).validate(&seed.projects).is_err());
        assert!(entry(f64::NAN).validate(&seed.projects).is_err());
        entry(24.0).validate(&seed.projects).unwrap();
        entry(0.5).validate(&seed.projects).unwrap();
    }

    #[test]
    fn test_timesheet_rejects_unknown_project() {
        let seed = seed();
        let entry = NewTimesheetEntry {
            employee_id: "EMP001".to_string(),
            project_id: "PROJ-99".to_string(),
            date: anchor(),
            hours: 4.0,
            is_billable: false,
            description: "Research".to_string(),
        };
        assert!(entry.validate(&seed.projects).is_err());
    }
}
