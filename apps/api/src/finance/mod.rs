// Finance: travel requests, expense claims, loans and salary advances.

pub mod handlers;

use serde::Serialize;

use crate::filter::{Choice, DateRange, Pipeline};
use crate::models::requests::{
    ApprovalStatus, ExpenseClaim, ExpenseStatus, ExpenseType, LoanKind, LoanRequest,
    LoanStatus, TravelRequest,
};

pub const TRAVEL_LISTING: &str = "/api/v1/travel";
pub const EXPENSES_LISTING: &str = "/api/v1/expenses";
pub const LOANS_LISTING: &str = "/api/v1/loans";

pub const TRAVEL_DECISIONS: [ApprovalStatus; 2] =
    [ApprovalStatus::Approved, ApprovalStatus::Denied];
pub const LOAN_DECISIONS: [LoanStatus; 2] = [LoanStatus::Approved, LoanStatus::Rejected];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelFilter {
    pub search: String,
    pub status: Choice<ApprovalStatus>,
    pub destination: Choice<String>,
    /// A trip matches when any of its days falls inside the range.
    pub range: DateRange,
}

pub fn list_travel(records: &[TravelRequest], filter: &TravelFilter) -> Vec<TravelRequest> {
    Pipeline::<TravelRequest>::new()
        .search(&filter.search, |r: &TravelRequest| vec![r.employee_name.as_str()])
        .matching(&filter.status, |r: &TravelRequest, s: &ApprovalStatus| {
            r.status == *s
        })
        .matching(&filter.destination, |r: &TravelRequest, d: &String| {
            r.destination == *d
        })
        .overlapping(filter.range, |r: &TravelRequest| (r.start_date, r.end_date))
        .run(records)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub search: String,
    pub status: Choice<ExpenseStatus>,
    pub expense_type: Choice<ExpenseType>,
    pub range: DateRange,
}

pub fn list_expenses(records: &[ExpenseClaim], filter: &ExpenseFilter) -> Vec<ExpenseClaim> {
    Pipeline::<ExpenseClaim>::new()
        .search(&filter.search, |c: &ExpenseClaim| vec![c.employee_name.as_str()])
        .matching(&filter.status, |c: &ExpenseClaim, s: &ExpenseStatus| {
            c.status == *s
        })
        .matching(&filter.expense_type, |c: &ExpenseClaim, t: &ExpenseType| {
            c.expense_type == *t
        })
        .within(filter.range, |c: &ExpenseClaim| c.date)
        .run(records)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanFilter {
    pub search: String,
    pub status: Choice<LoanStatus>,
    pub kind: Choice<LoanKind>,
}

pub fn list_loans(records: &[LoanRequest], filter: &LoanFilter) -> Vec<LoanRequest> {
    Pipeline::<LoanRequest>::new()
        .search(&filter.search, |l: &LoanRequest| vec![l.employee_name.as_str()])
        .matching(&filter.status, |l: &LoanRequest, s: &LoanStatus| l.status == *s)
        .matching(&filter.kind, |l: &LoanRequest, k: &LoanKind| l.kind == *k)
        .run(records)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanView {
    #[serde(flatten)]
    pub loan: LoanRequest,
    pub outstanding: f64,
}

impl From<LoanRequest> for LoanView {
    fn from(loan: LoanRequest) -> Self {
        Self {
            outstanding: loan.outstanding(),
            loan,
        }
    }
}

/// Still owed on approved loans and advances.
pub fn total_outstanding(records: &[LoanRequest]) -> f64 {
    records
        .iter()
        .filter(|l| l.status == LoanStatus::Approved)
        .map(LoanRequest::outstanding)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;
    use chrono::{Duration, NaiveDate};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn seed() -> SeedData {
        SeedData::build(anchor())
    }

    #[test]
    fn test_travel_range_uses_overlap() {
        let seed = seed();
        // Starts mid-way through TR003 (days 5-9) and TR001 (10-15).
        let filter = TravelFilter {
            range: DateRange::between(anchor() + Duration::days(8), anchor() + Duration::days(11)),
            ..Default::default()
        };
        let ids: Vec<_> = list_travel(&seed.travel, &filter)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["TR001", "TR003"]);
    }

    #[test]
    fn test_travel_range_inside_trip() {
        let seed = seed();
        let filter = TravelFilter {
            range: DateRange::between(anchor() + Duration::days(21), anchor() + Duration::days(22)),
            ..Default::default()
        };
        let found = list_travel(&seed.travel, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "TR002");
    }

    #[test]
    fn test_travel_destination_exact_match() {
        let seed = seed();
        let filter = TravelFilter {
            destination: Choice::Only("London, UK".to_string()),
            ..Default::default()
        };
        assert_eq!(list_travel(&seed.travel, &filter).len(), 1);
        let filter = TravelFilter {
            destination: Choice::Only("London".to_string()),
            ..Default::default()
        };
        assert!(list_travel(&seed.travel, &filter).is_empty());
    }

    #[test]
    fn test_expense_range_is_point_containment() {
        let seed = seed();
        let filter = ExpenseFilter {
            range: DateRange::new(Some(anchor() - Duration::days(5)), None),
            ..Default::default()
        };
        let found = list_expenses(&seed.expenses, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "EC001");
    }

    #[test]
    fn test_expense_status_and_type() {
        let seed = seed();
        let filter = ExpenseFilter {
            status: Choice::Only(ExpenseStatus::Approved),
            expense_type: Choice::Only(ExpenseType::Hotel),
            ..Default::default()
        };
        assert_eq!(list_expenses(&seed.expenses, &filter).len(), 1);
    }

    #[test]
    fn test_loan_view_and_outstanding_total() {
        let seed = seed();
        let view = LoanView::from(seed.loans[1].clone());
        assert_eq!(view.outstanding, 4000.0);
        // LOAN001 (500) and LOAN002 (4000) are approved.
        assert_eq!(total_outstanding(&seed.loans), 4500.0);
    }

    #[test]
    fn test_loan_kind_filter() {
        let seed = seed();
        let filter = LoanFilter {
            kind: Choice::Only(LoanKind::Advance),
            ..Default::default()
        };
        let ids: Vec<_> = list_loans(&seed.loans, &filter)
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec!["LOAN001", "LOAN003"]);
    }
}
