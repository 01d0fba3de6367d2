use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::filter::{Choice, DateRange, Listing};
use crate::finance::{
    list_expenses, list_loans, list_travel, total_outstanding, ExpenseFilter, LoanFilter,
    LoanView, TravelFilter, EXPENSES_LISTING, LOANS_LISTING, LOAN_DECISIONS, TRAVEL_DECISIONS,
    TRAVEL_LISTING,
};
use crate::models::requests::{
    ApprovalStatus, ExpenseClaim, ExpenseStatus, ExpenseType, LoanKind, LoanRequest,
    LoanStatus, TravelRequest,
};
use crate::models::{ensure_target, StatusChange};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TravelQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<ApprovalStatus>,
    #[serde(default)]
    pub destination: Choice<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<ExpenseStatus>,
    #[serde(default)]
    pub expense_type: Choice<ExpenseType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct LoanQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Choice<LoanStatus>,
    #[serde(default, rename = "type")]
    pub kind: Choice<LoanKind>,
}

#[derive(Serialize)]
pub struct LoanListing {
    #[serde(flatten)]
    pub listing: Listing<LoanView>,
    pub total_outstanding: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Travel
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/travel
pub async fn handle_list_travel(
    State(state): State<AppState>,
    Query(q): Query<TravelQuery>,
) -> Result<Json<Listing<TravelRequest>>, AppError> {
    let filter = TravelFilter {
        search: q.search,
        status: q.status,
        destination: q.destination,
        range: DateRange::checked(q.from, q.to)?,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .travel
        .visible(filter, |records, filter| list_travel(records, filter));
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/travel/:id/status
pub async fn handle_travel_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<ApprovalStatus>>,
) -> Result<Json<TravelRequest>, AppError> {
    let status = ensure_target(change.status, &TRAVEL_DECISIONS)?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .travel
        .store_mut()
        .replace(&id, |r| TravelRequest {
            status,
            ..r.clone()
        })
        .cloned()
        .ok_or_else(|| {
            AppError::not_found(TRAVEL_LISTING, format!("Travel request {id} not found"))
        })?;
    info!(id = %updated.id, status = ?updated.status, "Travel request decided");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Expenses
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/expenses
pub async fn handle_list_expenses(
    State(state): State<AppState>,
    Query(q): Query<ExpenseQuery>,
) -> Result<Json<Listing<ExpenseClaim>>, AppError> {
    let filter = ExpenseFilter {
        search: q.search,
        status: q.status,
        expense_type: q.expense_type,
        range: DateRange::checked(q.from, q.to)?,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .expenses
        .visible(filter, |records, filter| list_expenses(records, filter));
    Ok(Json(Listing::new(items)))
}

/// POST /api/v1/expenses/:id/status
pub async fn handle_expense_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<ExpenseStatus>>,
) -> Result<Json<ExpenseClaim>, AppError> {
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .expenses
        .store_mut()
        .replace(&id, |c| ExpenseClaim {
            status: change.status,
            ..c.clone()
        })
        .cloned()
        .ok_or_else(|| {
            AppError::not_found(EXPENSES_LISTING, format!("Expense claim {id} not found"))
        })?;
    info!(id = %updated.id, status = ?updated.status, "Expense claim updated");
    Ok(Json(updated))
}

// ────────────────────────────────────────────────────────────────────────────
// Loans
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/loans
pub async fn handle_list_loans(
    State(state): State<AppState>,
    Query(q): Query<LoanQuery>,
) -> Result<Json<LoanListing>, AppError> {
    let filter = LoanFilter {
        search: q.search,
        status: q.status,
        kind: q.kind,
    };
    let mut ws = state.workspace.lock().await;
    let items = ws
        .loans
        .visible(filter, |records, filter| list_loans(records, filter));
    let outstanding = total_outstanding(ws.loans.store().records());
    Ok(Json(LoanListing {
        listing: Listing::new(items.into_iter().map(LoanView::from).collect()),
        total_outstanding: outstanding,
    }))
}

/// POST /api/v1/loans/:id/status
pub async fn handle_loan_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange<LoanStatus>>,
) -> Result<Json<LoanView>, AppError> {
    let status = ensure_target(change.status, &LOAN_DECISIONS)?;
    let mut ws = state.workspace.lock().await;
    let updated = ws
        .loans
        .store_mut()
        .replace(&id, |l| LoanRequest {
            status,
            ..l.clone()
        })
        .cloned()
        .ok_or_else(|| AppError::not_found(LOANS_LISTING, format!("Loan request {id} not found")))?;
    info!(id = %updated.id, status = ?updated.status, "Loan request decided");
    Ok(Json(LoanView::from(updated)))
}
