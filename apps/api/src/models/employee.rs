use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(alias = "engineering")]
    Engineering,
    #[serde(alias = "marketing")]
    Marketing,
    #[serde(alias = "sales")]
    Sales,
    #[serde(rename = "HR", alias = "hr")]
    Hr,
    #[serde(alias = "design")]
    Design,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Design,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewCycle {
    Annual,
    Quarterly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub score: f64,
    pub last_review_date: NaiveDate,
    pub review_cycle: ReviewCycle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub performance: PerformanceSnapshot,
}

impl Entity for Employee {
    const ID_PREFIX: &'static str = "EMP";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactChannel {
    Contract,
    Freelance,
    #[serde(rename = "Referral Program")]
    ReferralProgram,
}

/// A former employee kept on file for re-engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alumnus {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub last_role: String,
    pub last_department: Department,
    pub email: String,
    pub departure_date: NaiveDate,
    pub contact_for: Vec<ContactChannel>,
}

impl Entity for Alumnus {
    const ID_PREFIX: &'static str = "ALUM";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Resolves an employee by display name. Requests reference employees by name only.
pub fn find_by_name<'a>(directory: &'a [Employee], name: &str) -> Option<&'a Employee> {
    directory.iter().find(|e| e.name == name)
}

/// Placeholder avatar URL derived from a person's first name.
pub fn placeholder_avatar(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or("person");
    format!("https://source.unsplash.com/random/100x100/?person,{first}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_accepts_lowercase_alias() {
        let d: Department = serde_json::from_str(r#""engineering""#).unwrap();
        assert_eq!(d, Department::Engineering);
        let d: Department = serde_json::from_str(r#""hr""#).unwrap();
        assert_eq!(d, Department::Hr);
        assert_eq!(serde_json::to_string(&Department::Hr).unwrap(), r#""HR""#);
    }

    #[test]
    fn test_contact_channel_wire_name() {
        let c: ContactChannel = serde_json::from_str(r#""Referral Program""#).unwrap();
        assert_eq!(c, ContactChannel::ReferralProgram);
    }

    #[test]
    fn test_placeholder_avatar_uses_first_name() {
        assert!(placeholder_avatar("Maria Garcia").ends_with("?person,Maria"));
        assert!(placeholder_avatar("").ends_with("?person,person"));
    }
}
