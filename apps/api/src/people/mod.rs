// People: the employee directory, alumni network and performance overview.

pub mod handlers;
pub mod performance;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::filter::cascade::DepartmentScope;
use crate::filter::{Choice, Pipeline};
use crate::models::employee::placeholder_avatar;
use crate::models::{Alumnus, ContactChannel, Department, Employee};

pub const EMPLOYEES_LISTING: &str = "/api/v1/employees";
pub const ALUMNI_LISTING: &str = "/api/v1/alumni";

// ────────────────────────────────────────────────────────────────────────────
// Employees
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub search: String,
    pub scope: DepartmentScope,
}

pub fn list_employees(records: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    Pipeline::<Employee>::new()
        .search(&filter.search, |e: &Employee| {
            vec![e.name.as_str(), e.title.as_str()]
        })
        .filter(|e: &Employee| filter.scope.admits_employee(e))
        .run(records)
}

/// Looks up the employee a new request is filed for.
pub fn resolve_employee<'a>(directory: &'a [Employee], id: &str) -> Result<&'a Employee, AppError> {
    directory
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| AppError::Validation(format!("unknown employee '{id}'")))
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Editable profile fields.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEdit {
    pub name: String,
    pub title: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
}

impl EmployeeEdit {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("title", &self.title)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        if !self.email.contains('@') {
            return Err(AppError::Validation("email must be an email address".to_string()));
        }
        Ok(())
    }

    /// Applies the edit; id, avatar, skills and performance are preserved.
    pub fn apply(&self, employee: &Employee) -> Employee {
        Employee {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            department: self.department,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..employee.clone()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Alumni
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniFilter {
    pub search: String,
    pub department: Choice<Department>,
    pub contact_for: Choice<ContactChannel>,
}

pub fn list_alumni(records: &[Alumnus], filter: &AlumniFilter) -> Vec<Alumnus> {
    Pipeline::<Alumnus>::new()
        .search(&filter.search, |a: &Alumnus| {
            vec![a.name.as_str(), a.last_role.as_str()]
        })
        .matching(&filter.department, |a: &Alumnus, d: &Department| {
            a.last_department == *d
        })
        .matching(&filter.contact_for, |a: &Alumnus, c: &ContactChannel| {
            a.contact_for.contains(c)
        })
        .run(records)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAlumnus {
    pub name: String,
    pub last_role: String,
    pub last_department: Department,
    pub email: String,
    pub departure_date: NaiveDate,
    pub contact_for: Vec<ContactChannel>,
}

impl NewAlumnus {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("last_role", &self.last_role)?;
        require("email", &self.email)?;
        if self.contact_for.is_empty() {
            return Err(AppError::Validation(
                "contact_for needs at least one channel".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> Alumnus {
        let mut contact_for = self.contact_for;
        contact_for.dedup();
        Alumnus {
            id,
            avatar: placeholder_avatar(&self.name),
            name: self.name.trim().to_string(),
            last_role: self.last_role.trim().to_string(),
            last_department: self.last_department,
            email: self.email.trim().to_string(),
            departure_date: self.departure_date,
            contact_for,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    fn seed() -> SeedData {
        SeedData::build(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_employee_search_covers_name_and_title() {
        let seed = seed();
        let filter = EmployeeFilter {
            search: "designer".to_string(),
            ..Default::default()
        };
        let found = list_employees(&seed.employees, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ethan Hunt");
    }

    #[test]
    fn test_employee_cascade_filters_department_then_employee() {
        let seed = seed();
        let mut filter = EmployeeFilter::default();
        filter.scope.set_department(Choice::Only(Department::Engineering));
        assert_eq!(list_employees(&seed.employees, &filter).len(), 1);

        filter.scope.set_employee(Choice::Only("EMP001".to_string()));
        let found = list_employees(&seed.employees, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "EMP001");
    }

    #[test]
    fn test_edit_preserves_untouched_fields() {
        let seed = seed();
        let edit = EmployeeEdit {
            name: "Alice Smith".to_string(),
            title: "Staff Engineer".to_string(),
            department: Department::Engineering,
            email: "alice.s@synergy.com".to_string(),
            phone: "123-456-7890".to_string(),
        };
        edit.validate().unwrap();
        let updated = edit.apply(&seed.employees[0]);
        assert_eq!(updated.id, "EMP001");
        assert_eq!(updated.skills, seed.employees[0].skills);
        assert_eq!(updated.name, "Alice Smith");
    }

    #[test]
    fn test_edit_rejects_blank_fields() {
        let edit = EmployeeEdit {
            name: " ".to_string(),
            title: "x".to_string(),
            department: Department::Sales,
            email: "a@b.c".to_string(),
            phone: "1".to_string(),
        };
        assert!(matches!(edit.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_alumni_contact_for_membership() {
        let seed = seed();
        let filter = AlumniFilter {
            contact_for: Choice::Only(ContactChannel::Freelance),
            ..Default::default()
        };
        let names: Vec<_> = list_alumni(&seed.alumni, &filter)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["George Lucas", "Hannah Abbott"]);
    }

    #[test]
    fn test_new_alumnus_requires_contact_channel() {
        let alumnus = NewAlumnus {
            name: "Ian Malcolm".to_string(),
            last_role: "Data Scientist".to_string(),
            last_department: Department::Engineering,
            email: "ian@chaos.org".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            contact_for: Vec::new(),
        };
        assert!(alumnus.validate().is_err());

        let alumnus = NewAlumnus {
            contact_for: vec![ContactChannel::Contract],
            ..alumnus
        };
        alumnus.validate().unwrap();
        let record = alumnus.into_record("ALUM004".to_string());
        assert_eq!(record.id, "ALUM004");
        assert!(record.avatar.ends_with("?person,Ian"));
    }

    #[test]
    fn test_resolve_employee_rejects_unknown_id() {
        let seed = seed();
        assert_eq!(resolve_employee(&seed.employees, "EMP002").unwrap().name, "Bob Williams");
        assert!(matches!(
            resolve_employee(&seed.employees, "EMP404"),
            Err(AppError::Validation(_))
        ));
    }
}
