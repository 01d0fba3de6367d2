pub mod employee;
pub mod hiring;
pub mod operations;
pub mod requests;

use std::fmt::Debug;

use serde::Deserialize;

use crate::errors::AppError;

pub use employee::{Alumnus, ContactChannel, Department, Employee, PerformanceSnapshot, ReviewCycle};

/// Body of every `POST .../:id/status` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusChange<S> {
    pub status: S,
}

/// Accepts `status` only when it is one of the page's target statuses.
pub fn ensure_target<S: Copy + PartialEq + Debug>(status: S, allowed: &[S]) -> Result<S, AppError> {
    if allowed.contains(&status) {
        Ok(status)
    } else {
        Err(AppError::Validation(format!(
            "status {status:?} is not allowed here; expected one of {allowed:?}"
        )))
    }
}
