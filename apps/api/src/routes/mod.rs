pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::dashboard::handlers as dashboard;
use crate::finance::handlers as finance;
use crate::generation::handlers as generation;
use crate::hiring::handlers as hiring;
use crate::operations::handlers as operations;
use crate::people::handlers as people;
use crate::state::AppState;
use crate::time_off::handlers as time_off;

/// Resumes arrive base64-encoded, which inflates them by a third.
const BODY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route("/api/v1/admin/reset", post(dashboard::handle_reset))
        // People
        .route("/api/v1/employees", get(people::handle_list_employees))
        .route(
            "/api/v1/employees/:id",
            get(people::handle_get_employee).put(people::handle_update_employee),
        )
        .route("/api/v1/performance", get(people::handle_performance))
        .route(
            "/api/v1/alumni",
            get(people::handle_list_alumni).post(people::handle_add_alumnus),
        )
        .route("/api/v1/alumni/:id", get(people::handle_get_alumnus))
        // Time off
        .route(
            "/api/v1/leave",
            get(time_off::handle_list_leave).post(time_off::handle_create_leave),
        )
        .route("/api/v1/leave/:id/status", post(time_off::handle_leave_status))
        .route(
            "/api/v1/remote-work",
            get(time_off::handle_list_remote_work).post(time_off::handle_create_remote_work),
        )
        .route(
            "/api/v1/remote-work/:id/status",
            post(time_off::handle_remote_work_status),
        )
        .route("/api/v1/attendance", get(time_off::handle_attendance_day))
        .route(
            "/api/v1/attendance/history/:employee_id",
            get(time_off::handle_attendance_history),
        )
        // Hiring
        .route(
            "/api/v1/positions",
            get(hiring::handle_list_positions).post(hiring::handle_create_position),
        )
        .route("/api/v1/positions/:id", get(hiring::handle_get_position))
        .route(
            "/api/v1/positions/:id/applicants",
            post(hiring::handle_add_applicant),
        )
        .route(
            "/api/v1/positions/:id/applicants/resume",
            post(hiring::handle_add_applicant_from_resume),
        )
        .route(
            "/api/v1/positions/:id/applicants/upload",
            post(hiring::handle_upload_resume),
        )
        .route(
            "/api/v1/positions/:id/applicants/:applicant_id",
            get(hiring::handle_get_applicant),
        )
        .route(
            "/api/v1/positions/:id/applicants/:applicant_id/stage",
            post(hiring::handle_applicant_stage),
        )
        // Operations
        .route("/api/v1/assets", get(operations::handle_list_assets))
        .route("/api/v1/assets/:id/issue", post(operations::handle_issue_asset))
        .route("/api/v1/assets/:id/return", post(operations::handle_return_asset))
        .route(
            "/api/v1/tickets",
            get(operations::handle_list_tickets).post(operations::handle_create_ticket),
        )
        .route("/api/v1/tickets/:id/status", post(operations::handle_ticket_status))
        .route(
            "/api/v1/timesheets",
            get(operations::handle_list_timesheets).post(operations::handle_create_timesheet),
        )
        .route(
            "/api/v1/timesheets/:id/status",
            post(operations::handle_timesheet_status),
        )
        // Finance
        .route("/api/v1/travel", get(finance::handle_list_travel))
        .route("/api/v1/travel/:id/status", post(finance::handle_travel_status))
        .route("/api/v1/expenses", get(finance::handle_list_expenses))
        .route("/api/v1/expenses/:id/status", post(finance::handle_expense_status))
        .route("/api/v1/loans", get(finance::handle_list_loans))
        .route("/api/v1/loans/:id/status", post(finance::handle_loan_status))
        // Calendar
        .route("/api/v1/calendar", get(calendar::handle_calendar))
        .route("/api/v1/calendar/events", post(calendar::handle_create_event))
        // Generation
        .route(
            "/api/v1/generation/job-description",
            post(generation::handle_job_description),
        )
        .route("/api/v1/generation/resume", post(generation::handle_parse_resume))
        .route("/api/v1/generation/skills", post(generation::handle_suggest_skills))
        .route(
            "/api/v1/generation/requests/:token",
            delete(generation::handle_cancel),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
