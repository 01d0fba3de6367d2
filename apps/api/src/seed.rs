//! Fixture data every store starts from.
//!
//! Dates are expressed relative to an anchor day (normally "today") so the dashboard always
//! shows recent activity and upcoming events.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::hiring::{
    Applicant, ApplicantStage, EducationItem, ExperienceItem, OpenPosition, PositionStatus,
    ResumeProfile,
};
use crate::models::operations::{
    work_metrics, Asset, AssetCondition, AssetStatus, AssetType, AttendanceRecord,
    AttendanceStatus, CalendarEvent, EventType, Project, Ticket, TicketCategory, TicketStatus,
    TimesheetEntry, TimesheetStatus,
};
use crate::models::requests::{
    ApprovalStatus, ExpenseClaim, ExpenseStatus, ExpenseType, LeaveRequest, LeaveType,
    LoanKind, LoanRequest, LoanStatus, TravelRequest, WfhRequest,
};
use crate::models::{
    Alumnus, ContactChannel, Department, Employee, PerformanceSnapshot, ReviewCycle,
};

const STANDARD_SHIFT: &str = "09:00-17:00";

#[derive(Debug, Clone)]
pub struct SeedData {
    pub anchor: NaiveDate,
    pub employees: Vec<Employee>,
    pub alumni: Vec<Alumnus>,
    pub leave: Vec<LeaveRequest>,
    pub remote_work: Vec<WfhRequest>,
    pub positions: Vec<OpenPosition>,
    pub applicants: Vec<Applicant>,
    pub attendance: Vec<AttendanceRecord>,
    pub travel: Vec<TravelRequest>,
    pub expenses: Vec<ExpenseClaim>,
    pub assets: Vec<Asset>,
    pub tickets: Vec<Ticket>,
    pub projects: Vec<Project>,
    pub timesheets: Vec<TimesheetEntry>,
    pub events: Vec<CalendarEvent>,
    pub loans: Vec<LoanRequest>,
}

/// Resolves day offsets against the anchor.
#[derive(Debug, Clone, Copy)]
struct Clock(NaiveDate);

impl Clock {
    fn days(self, offset: i64) -> NaiveDate {
        self.0 + Duration::days(offset)
    }

    fn months_ago(self, months: u32) -> NaiveDate {
        self.0.checked_sub_months(Months::new(months)).unwrap_or(self.0)
    }
}

fn avatar(hint: &str) -> String {
    format!("https://source.unsplash.com/random/100x100/?{hint}")
}

impl SeedData {
    pub fn build(anchor: NaiveDate) -> Self {
        let clock = Clock(anchor);
        Self {
            anchor,
            employees: employees(clock),
            alumni: alumni(clock),
            leave: leave(clock),
            remote_work: remote_work(clock),
            positions: positions(clock),
            applicants: applicants(clock),
            attendance: attendance(clock),
            travel: travel(clock),
            expenses: expenses(clock),
            assets: assets(clock),
            tickets: tickets(clock),
            projects: projects(),
            timesheets: timesheets(clock),
            events: events(clock),
            loans: loans(clock),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// People
// ────────────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    avatar_hint: &str,
    title: &str,
    department: Department,
    handle: &str,
    phone_suffix: u8,
    skills: [&str; 4],
    score: f64,
    last_review_date: NaiveDate,
    review_cycle: ReviewCycle,
) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar(avatar_hint),
        title: title.to_string(),
        department,
        email: format!("{handle}@synergy.com"),
        phone: format!("123-456-789{phone_suffix}"),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        performance: PerformanceSnapshot {
            score,
            last_review_date,
            review_cycle,
        },
    }
}

fn employees(clock: Clock) -> Vec<Employee> {
    vec![
        employee(
            "EMP001",
            "Alice Johnson",
            "woman,portrait",
            "Senior Software Engineer",
            Department::Engineering,
            "alice.j",
            0,
            ["React", "Node.js", "TypeScript", "AWS"],
            4.8,
            clock.months_ago(2),
            ReviewCycle::Quarterly,
        ),
        employee(
            "EMP002",
            "Bob Williams",
            "man,portrait",
            "Product Manager",
            Department::Marketing,
            "bob.w",
            1,
            ["Product Strategy", "Agile", "JIRA", "Market Research"],
            4.2,
            clock.months_ago(1),
            ReviewCycle::Quarterly,
        ),
        employee(
            "EMP003",
            "Charlie Brown",
            "man,smiling",
            "Sales Director",
            Department::Sales,
            "charlie.b",
            2,
            ["Salesforce", "Negotiation", "Team Leadership", "Forecasting"],
            4.9,
            clock.months_ago(3),
            ReviewCycle::Annual,
        ),
        employee(
            "EMP004",
            "Diana Prince",
            "woman,professional",
            "HR Generalist",
            Department::Hr,
            "diana.p",
            3,
            ["Recruiting", "Employee Relations", "Onboarding", "HRIS"],
            4.5,
            clock.months_ago(4),
            ReviewCycle::Annual,
        ),
        employee(
            "EMP005",
            "Ethan Hunt",
            "man,serious",
            "UI/UX Designer",
            Department::Design,
            "ethan.h",
            4,
            ["Figma", "Sketch", "User Research", "Prototyping"],
            3.8,
            clock.months_ago(2),
            ReviewCycle::Quarterly,
        ),
    ]
}

fn alumni(clock: Clock) -> Vec<Alumnus> {
    vec![
        Alumnus {
            id: "ALUM001".to_string(),
            name: "Fiona Gallagher".to_string(),
            avatar: avatar("woman,ceo"),
            last_role: "Head of Marketing".to_string(),
            last_department: Department::Marketing,
            email: "fiona.g@personal.com".to_string(),
            departure_date: clock.months_ago(3),
            contact_for: vec![ContactChannel::ReferralProgram],
        },
        Alumnus {
            id: "ALUM002".to_string(),
            name: "George Lucas".to_string(),
            avatar: avatar("man,tech"),
            last_role: "Senior Backend Engineer".to_string(),
            last_department: Department::Engineering,
            email: "george.l@personal.dev".to_string(),
            departure_date: clock.months_ago(8),
            contact_for: vec![ContactChannel::Contract, ContactChannel::Freelance],
        },
        Alumnus {
            id: "ALUM003".to_string(),
            name: "Hannah Abbott".to_string(),
            avatar: avatar("woman,designer"),
            last_role: "Product Designer".to_string(),
            last_department: Department::Design,
            email: "hannah.a@personal.io".to_string(),
            departure_date: clock.months_ago(14),
            contact_for: vec![ContactChannel::Freelance],
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Time off
// ────────────────────────────────────────────────────────────────────────────

fn leave(clock: Clock) -> Vec<LeaveRequest> {
    let request = |id: &str, name: &str, hint: &str, start: i64, end: i64, leave_type, status| {
        LeaveRequest {
            id: id.to_string(),
            employee_name: name.to_string(),
            employee_avatar: avatar(hint),
            start_date: clock.days(start),
            end_date: clock.days(end),
            leave_type,
            status,
        }
    };
    vec![
        request("LR001", "Bob Williams", "man,portrait", 0, 5, LeaveType::Vacation, ApprovalStatus::Pending),
        request("LR002", "Alice Johnson", "woman,portrait", -10, -8, LeaveType::SickLeave, ApprovalStatus::Approved),
        request("LR003", "Ethan Hunt", "man,serious", -2, -1, LeaveType::Personal, ApprovalStatus::Denied),
        request("LR004", "Diana Prince", "woman,professional", -1, -1, LeaveType::SickLeave, ApprovalStatus::Approved),
    ]
}

fn remote_work(clock: Clock) -> Vec<WfhRequest> {
    let request = |id: &str, name: &str, hint: &str, day: i64, reason: Option<&str>, status| {
        WfhRequest {
            id: id.to_string(),
            employee_name: name.to_string(),
            employee_avatar: avatar(hint),
            start_date: clock.days(day),
            end_date: clock.days(day),
            reason: reason.map(str::to_string),
            status,
        }
    };
    vec![
        request("WFH001", "Alice Johnson", "woman,portrait", 2, Some("Focus on project deadline."), ApprovalStatus::Approved),
        request("WFH002", "Bob Williams", "man,portrait", 1, None, ApprovalStatus::Pending),
        request("WFH003", "Diana Prince", "woman,professional", -1, Some("Doctor's appointment in the morning."), ApprovalStatus::Denied),
    ]
}

fn attendance(clock: Clock) -> Vec<AttendanceRecord> {
    let record = |id: &str, name: &str, hint: &str, day: i64, check_in: Option<&str>, check_out: Option<&str>, status| {
        let (work_hours, overtime) = work_metrics(check_in, check_out);
        AttendanceRecord {
            id: id.to_string(),
            employee_name: name.to_string(),
            employee_avatar: avatar(hint),
            date: clock.days(day),
            check_in: check_in.map(str::to_string),
            check_out: check_out.map(str::to_string),
            status,
            shift: STANDARD_SHIFT.to_string(),
            work_hours,
            overtime,
        }
    };
    vec![
        record("ATT001", "Alice Johnson", "woman,portrait", 0, Some("08:55"), Some("17:05"), AttendanceStatus::OnTime),
        record("ATT002", "Bob Williams", "man,portrait", 0, Some("09:15"), Some("18:30"), AttendanceStatus::Late),
        record("ATT003", "Charlie Brown", "man,smiling", 0, None, None, AttendanceStatus::Absent),
        record("ATT004", "Diana Prince", "woman,professional", 0, Some("09:00"), Some("17:00"), AttendanceStatus::OnTime),
        record("ATT005", "Ethan Hunt", "man,serious", 0, Some("09:05"), None, AttendanceStatus::Present),
        record("ATT006", "Alice Johnson", "woman,portrait", -1, Some("08:58"), Some("18:02"), AttendanceStatus::OnTime),
        record("ATT007", "Bob Williams", "man,portrait", -1, Some("09:25"), Some("17:45"), AttendanceStatus::Late),
        record("ATT008", "Ethan Hunt", "man,serious", -1, Some("09:00"), Some("17:00"), AttendanceStatus::OnTime),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Hiring
// ────────────────────────────────────────────────────────────────────────────

fn positions(clock: Clock) -> Vec<OpenPosition> {
    let position = |id: &str, title: &str, department, location: &str, status, posted: i64, applicants| {
        OpenPosition {
            id: id.to_string(),
            title: title.to_string(),
            department,
            location: location.to_string(),
            status,
            posted_date: clock.days(posted),
            applicant_count: applicants,
        }
    };
    vec![
        position("OP001", "Frontend Developer", Department::Engineering, "Remote", PositionStatus::Interviewing, -14, 2),
        position("OP002", "Digital Marketing Specialist", Department::Marketing, "New York, NY", PositionStatus::Open, -5, 0),
        position("OP003", "Account Executive", Department::Sales, "San Francisco, CA", PositionStatus::OfferExtended, -35, 0),
        position("OP004", "Recruiter", Department::Hr, "Austin, TX", PositionStatus::Open, -2, 0),
    ]
}

fn experience(title: &str, company: &str, duration: &str) -> ExperienceItem {
    ExperienceItem {
        title: title.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
    }
}

fn education(institution: &str, degree: &str, year: &str) -> EducationItem {
    EducationItem {
        institution: institution.to_string(),
        degree: degree.to_string(),
        year: year.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn applicants(clock: Clock) -> Vec<Applicant> {
    vec![
        Applicant {
            id: "APP001".to_string(),
            avatar: avatar("man,professional"),
            position_id: "OP001".to_string(),
            applied_date: clock.days(-5),
            stage: ApplicantStage::Interview,
            profile: ResumeProfile {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                skills: strings(&["JavaScript", "React", "CSS", "Next.js", "GraphQL"]),
                experience: vec![
                    experience("Frontend Developer", "Tech Solutions Inc.", "2021 - Present"),
                    experience("Junior Developer", "Web Wizards LLC", "2019 - 2021"),
                ],
                education: vec![education("State University", "B.S. in Computer Science", "2019")],
                resume_summary: "Highly motivated Frontend Developer with 4+ years of experience in building and maintaining responsive web applications using modern technologies. Proven ability to collaborate with cross-functional teams to deliver high-quality software.".to_string(),
            },
        },
        Applicant {
            id: "APP002".to_string(),
            avatar: avatar("woman,tech"),
            position_id: "OP001".to_string(),
            applied_date: clock.days(-2),
            stage: ApplicantStage::Screening,
            profile: ResumeProfile {
                name: "Jane Smith".to_string(),
                email: "jane.smith@example.com".to_string(),
                phone: "555-987-6543".to_string(),
                skills: strings(&["TypeScript", "React", "Vue.js", "Testing", "CI/CD"]),
                experience: vec![experience("Software Engineer", "Innovate Corp.", "2020 - Present")],
                education: vec![education("Code Academy", "Full-Stack Web Development Bootcamp", "2020")],
                resume_summary: "Creative Software Engineer with a passion for clean code and user-centric design. Experienced in both frontend and backend development, with a strong focus on React and TypeScript.".to_string(),
            },
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Finance
// ────────────────────────────────────────────────────────────────────────────

fn travel(clock: Clock) -> Vec<TravelRequest> {
    let request = |id: &str, name: &str, destination: &str, purpose: &str, start: i64, end: i64, cost: f64, status| {
        TravelRequest {
            id: id.to_string(),
            employee_name: name.to_string(),
            destination: destination.to_string(),
            purpose: purpose.to_string(),
            start_date: clock.days(start),
            end_date: clock.days(end),
            estimated_cost: cost,
            status,
        }
    };
    vec![
        request("TR001", "Alice Johnson", "London, UK", "Client Meeting", 10, 15, 3200.0, ApprovalStatus::Approved),
        request("TR002", "Charlie Brown", "Las Vegas, NV", "Annual Sales Conference", 20, 23, 1800.0, ApprovalStatus::Pending),
        request("TR003", "Ethan Hunt", "Berlin, Germany", "Design Workshop", 5, 9, 2500.0, ApprovalStatus::Denied),
    ]
}

fn expenses(clock: Clock) -> Vec<ExpenseClaim> {
    let claim = |id: &str, travel: Option<&str>, name: &str, day: i64, expense_type, amount: f64, status| {
        ExpenseClaim {
            id: id.to_string(),
            travel_request_id: travel.map(str::to_string),
            employee_name: name.to_string(),
            date: clock.days(day),
            expense_type,
            amount,
            receipt_url: None,
            status,
        }
    };
    vec![
        claim("EC001", Some("TR001"), "Alice Johnson", -5, ExpenseType::Flight, 1250.55, ExpenseStatus::Reimbursed),
        claim("EC002", None, "Bob Williams", -2, ExpenseType::Meals, 75.20, ExpenseStatus::Submitted),
        claim("EC003", Some("TR001"), "Alice Johnson", -4, ExpenseType::Hotel, 850.0, ExpenseStatus::Approved),
        claim("EC004", None, "Charlie Brown", -10, ExpenseType::Transport, 45.0, ExpenseStatus::Denied),
    ]
}

fn loans(clock: Clock) -> Vec<LoanRequest> {
    let loan = |id: &str, name: &str, amount: f64, paid: f64, kind, reason: &str, status, day: i64| {
        LoanRequest {
            id: id.to_string(),
            employee_name: name.to_string(),
            amount,
            paid,
            kind,
            reason: reason.to_string(),
            status,
            request_date: clock.days(day),
        }
    };
    vec![
        loan("LOAN001", "Bob Williams", 500.0, 0.0, LoanKind::Advance, "Unexpected medical expense.", LoanStatus::Approved, -2),
        loan("LOAN002", "Alice Johnson", 5000.0, 1000.0, LoanKind::Loan, "Home renovation project.", LoanStatus::Approved, -30),
        loan("LOAN003", "Ethan Hunt", 1000.0, 0.0, LoanKind::Advance, "Car repair.", LoanStatus::Rejected, -10),
        loan("LOAN004", "Diana Prince", 2000.0, 0.0, LoanKind::Loan, "Family emergency.", LoanStatus::Pending, -1),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

fn assets(clock: Clock) -> Vec<Asset> {
    let asset = |id: &str, name: &str, asset_type, serial: &str, status, holder: Option<(&str, i64)>, condition| {
        Asset {
            id: id.to_string(),
            name: name.to_string(),
            asset_type,
            serial_number: serial.to_string(),
            status,
            assigned_to: holder.map(|(employee, _)| employee.to_string()),
            date_assigned: holder.map(|(_, day)| clock.days(day)),
            condition,
        }
    };
    vec![
        asset("ASSET001", "MacBook Pro 16\"", AssetType::Laptop, "C02G8R2JLVCF", AssetStatus::Assigned, Some(("EMP001", -300)), AssetCondition::Good),
        asset("ASSET002", "Dell XPS 15", AssetType::Laptop, "DXPS15-987654", AssetStatus::Available, None, AssetCondition::New),
        asset("ASSET003", "iPhone 15 Pro", AssetType::Phone, "IP15P-123456", AssetStatus::Assigned, Some(("EMP003", -60)), AssetCondition::Good),
        asset("ASSET004", "ID Card", AssetType::IdCard, "IDC-EMP002", AssetStatus::Assigned, Some(("EMP002", -450)), AssetCondition::Fair),
        asset("ASSET005", "Lenovo ThinkPad X1", AssetType::Laptop, "LTX1-555444", AssetStatus::InRepair, None, AssetCondition::Poor),
        asset("ASSET006", "Samsung Galaxy S23", AssetType::Phone, "SGS23-777888", AssetStatus::Available, None, AssetCondition::New),
        asset("ASSET007", "MacBook Pro 14\"", AssetType::Laptop, "C02H1A2B3D4E", AssetStatus::Retired, None, AssetCondition::Poor),
    ]
}

fn tickets(clock: Clock) -> Vec<Ticket> {
    let ticket = |id: &str, subject: &str, description: &str, name: &str, category, status, day: i64| {
        Ticket {
            id: id.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
            employee_name: name.to_string(),
            category,
            status,
            created_date: clock.days(day),
        }
    };
    vec![
        ticket(
            "TKT-001",
            "Incorrect Tax Deduction",
            "I believe my tax deduction for last month was incorrect. Can someone please check?",
            "Bob Williams",
            TicketCategory::Payroll,
            TicketStatus::InProgress,
            -2,
        ),
        ticket(
            "TKT-002",
            "How to enroll in dental plan?",
            "I missed the open enrollment period but would like to enroll in the dental plan. What are my options?",
            "Ethan Hunt",
            TicketCategory::Benefits,
            TicketStatus::Resolved,
            -15,
        ),
        ticket(
            "TKT-003",
            "Request for standing desk",
            "I would like to request a standing desk for my workstation due to back issues.",
            "Alice Johnson",
            TicketCategory::Other,
            TicketStatus::Open,
            -1,
        ),
        ticket(
            "TKT-004",
            "Question about WFH policy",
            "What is the company policy on working from home on a regular basis?",
            "Diana Prince",
            TicketCategory::Policy,
            TicketStatus::Resolved,
            -25,
        ),
    ]
}

fn projects() -> Vec<Project> {
    [
        ("PROJ-01", "Website Redesign", "Innovate Corp"),
        ("PROJ-02", "Mobile App Development", "Tech Solutions Inc."),
        ("PROJ-03", "Q3 Marketing Campaign", "Internal"),
    ]
    .into_iter()
    .map(|(id, name, client)| Project {
        id: id.to_string(),
        name: name.to_string(),
        client: client.to_string(),
    })
    .collect()
}

fn timesheets(clock: Clock) -> Vec<TimesheetEntry> {
    let entry = |id: &str, name: &str, project: &str, day: i64, hours: f64, billable: bool, description: &str, status| {
        TimesheetEntry {
            id: id.to_string(),
            employee_name: name.to_string(),
            project_id: project.to_string(),
            date: clock.days(day),
            hours,
            is_billable: billable,
            description: description.to_string(),
            status,
        }
    };
    vec![
        entry("TS001", "Alice Johnson", "PROJ-01", -1, 8.0, true, "Worked on homepage UI components.", TimesheetStatus::Submitted),
        entry("TS002", "Ethan Hunt", "PROJ-01", -1, 6.0, true, "Created wireframes for the new checkout flow.", TimesheetStatus::Approved),
        entry("TS003", "Bob Williams", "PROJ-03", -2, 4.0, false, "Planning meeting for social media strategy.", TimesheetStatus::Approved),
        entry("TS004", "Alice Johnson", "PROJ-02", -3, 8.0, true, "Setup initial project structure and auth screens.", TimesheetStatus::Rejected),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar
// ────────────────────────────────────────────────────────────────────────────

fn events(clock: Clock) -> Vec<CalendarEvent> {
    let labor_day = NaiveDate::from_ymd_opt(clock.0.year(), 9, 2).unwrap_or(clock.0);
    let event = |id: &str, title: &str, date: NaiveDate, event_type, description: &str| CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        date,
        event_type,
        description: Some(description.to_string()),
    };
    let mut events = vec![
        event("EVT001", "Q3 All-Hands Town Hall", clock.days(3), EventType::TownHall, "Join us for the quarterly all-hands meeting to discuss Q3 results and Q4 goals."),
        event("EVT002", "Engineering Tech Talk", clock.days(7), EventType::Training, "A deep dive into our new microservices architecture."),
        event("EVT003", "Summer BBQ Party", clock.days(10), EventType::Celebration, "Let's celebrate a great quarter with some food and fun!"),
        event("EVT004", "Labor Day", labor_day, EventType::Holiday, "Company-wide holiday."),
        event("EVT005", "React Best Practices", clock.days(3), EventType::Training, "Workshop on advanced React patterns and best practices."),
    ];
    events.sort_by_key(|e| e.date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_seed_ids_are_unique_per_collection() {
        let seed = SeedData::build(anchor());
        let ids: HashSet<_> = seed.leave.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), seed.leave.len());
        let ids: HashSet<_> = seed.assets.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), seed.assets.len());
    }

    #[test]
    fn test_seed_dates_follow_anchor() {
        let seed = SeedData::build(anchor());
        assert_eq!(seed.leave[0].start_date, anchor());
        assert_eq!(seed.leave[0].end_date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(
            seed.employees[0].performance.last_review_date,
            NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
        );
    }

    #[test]
    fn test_seed_attendance_carries_work_metrics() {
        let seed = SeedData::build(anchor());
        let bob = seed.attendance.iter().find(|r| r.id == "ATT002").unwrap();
        assert!((bob.overtime.unwrap() - 0.25).abs() < 1e-9);
        let ethan = seed.attendance.iter().find(|r| r.id == "ATT005").unwrap();
        assert_eq!(ethan.work_hours, None);
    }

    #[test]
    fn test_seed_events_sorted_by_date() {
        let seed = SeedData::build(anchor());
        assert!(seed.events.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(seed.events.iter().any(|e| e.title == "Labor Day"
            && e.date == NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()));
    }

    #[test]
    fn test_every_request_owner_is_in_directory() {
        let seed = SeedData::build(anchor());
        let names: HashSet<_> = seed.employees.iter().map(|e| e.name.as_str()).collect();
        assert!(seed.leave.iter().all(|r| names.contains(r.employee_name.as_str())));
        assert!(seed.travel.iter().all(|r| names.contains(r.employee_name.as_str())));
        assert!(seed.timesheets.iter().all(|r| names.contains(r.employee_name.as_str())));
    }
}
