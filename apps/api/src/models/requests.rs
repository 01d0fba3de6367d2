use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Lifecycle shared by leave, remote-work and travel requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    Vacation,
    #[serde(rename = "Sick Leave")]
    SickLeave,
    Personal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub status: ApprovalStatus,
}

impl LeaveRequest {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

impl Entity for LeaveRequest {
    const ID_PREFIX: &'static str = "LR";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WfhRequest {
    pub id: String,
    pub employee_name: String,
    pub employee_avatar: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: ApprovalStatus,
}

impl Entity for WfhRequest {
    const ID_PREFIX: &'static str = "WFH";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub id: String,
    pub employee_name: String,
    pub destination: String,
    pub purpose: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub estimated_cost: f64,
    pub status: ApprovalStatus,
}

impl Entity for TravelRequest {
    const ID_PREFIX: &'static str = "TR";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    Flight,
    Hotel,
    Meals,
    Transport,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Submitted,
    Approved,
    Denied,
    Reimbursed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseClaim {
    pub id: String,
    /// Travel request this claim belongs to, if any.
    pub travel_request_id: Option<String>,
    pub employee_name: String,
    pub date: NaiveDate,
    pub expense_type: ExpenseType,
    pub amount: f64,
    pub receipt_url: Option<String>,
    pub status: ExpenseStatus,
}

impl Entity for ExpenseClaim {
    const ID_PREFIX: &'static str = "EC";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanKind {
    Loan,
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub id: String,
    pub employee_name: String,
    pub amount: f64,
    pub paid: f64,
    #[serde(rename = "type")]
    pub kind: LoanKind,
    pub reason: String,
    pub status: LoanStatus,
    pub request_date: NaiveDate,
}

impl LoanRequest {
    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid).max(0.0)
    }
}

impl Entity for LoanRequest {
    const ID_PREFIX: &'static str = "LOAN";

    fn id(&self) -> &str {
        &self.id
    }
}
