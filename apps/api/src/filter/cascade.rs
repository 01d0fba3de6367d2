//! Department → employee cascade.
//!
//! Changing the department always resets the employee back to `All`. Whether an employee
//! can be chosen with no department depends on the screen, see `EmployeeSelect`.

use serde::{Deserialize, Serialize};

use crate::filter::Choice;
use crate::models::employee::find_by_name;
use crate::models::{Department, Employee};

/// How a screen treats an employee chosen while the department is `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeSelect {
    /// The employee filter applies on its own.
    Independent,
    /// The employee picker is disabled until a department is chosen (leave).
    RequiresDepartment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentScope {
    #[serde(default)]
    pub department: Choice<Department>,
    /// Employee id.
    #[serde(default)]
    pub employee: Choice<String>,
}

impl DepartmentScope {
    pub fn set_department(&mut self, department: Choice<Department>) {
        self.department = department;
        self.employee = Choice::All;
    }

    pub fn set_employee(&mut self, employee: Choice<String>) {
        self.employee = employee;
    }

    /// Resolves a scope that arrived in one piece (query string) rather than through
    /// `set_department`. The employee is dropped when the id is unknown or outside the
    /// chosen department, and under `RequiresDepartment` also when no department is chosen.
    pub fn normalized(mut self, directory: &[Employee], select: EmployeeSelect) -> Self {
        let Some(id) = self.employee.as_only() else {
            return self;
        };
        let keep = match (self.department.as_only(), select) {
            (None, EmployeeSelect::RequiresDepartment) => false,
            (None, EmployeeSelect::Independent) => directory.iter().any(|e| &e.id == id),
            (Some(department), _) => directory
                .iter()
                .any(|e| &e.id == id && e.department == *department),
        };
        if !keep {
            self.employee = Choice::All;
        }
        self
    }

    /// Resolves the selected employee id to its record. `None` when unconstrained or when
    /// the id is unknown.
    pub fn selected_employee<'a>(&self, directory: &'a [Employee]) -> Option<&'a Employee> {
        let id = self.employee.as_only()?;
        directory.iter().find(|e| &e.id == id)
    }

    /// Whether a record owned by `name` passes both levels of the cascade.
    ///
    /// Requests reference employees by display name, so the department check goes through
    /// the directory. A name missing from the directory fails any department constraint.
    pub fn admits_name(&self, name: &str, directory: &[Employee]) -> bool {
        if let Some(department) = self.department.as_only() {
            let in_department =
                find_by_name(directory, name).is_some_and(|e| e.department == *department);
            if !in_department {
                return false;
            }
        }
        match self.employee.as_only() {
            None => true,
            Some(_) => self
                .selected_employee(directory)
                .map_or(true, |e| e.name == name),
        }
    }

    /// Same as `admits_name`, for directory entries themselves. Expects a normalized scope.
    pub fn admits_employee(&self, employee: &Employee) -> bool {
        self.department.admits(&employee.department) && self.employee.admits(&employee.id)
    }
}

/// Query parameters of listings filtered by owner through the cascade.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopedQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Choice<Department>,
    #[serde(default)]
    pub employee: Choice<String>,
}

impl ScopedQuery {
    pub fn scope(&self, directory: &[Employee], select: EmployeeSelect) -> DepartmentScope {
        DepartmentScope {
            department: self.department.clone(),
            employee: self.employee.clone(),
        }
        .normalized(directory, select)
    }
}
