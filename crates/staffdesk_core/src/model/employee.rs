//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by roster and console layers.
//! - Provide the single validated construction path from raw console input.
//!
//! # Invariants
//! - `Role` is a closed set of three classifications.
//! - Role matching is case-insensitive; every other field is stored as given.
//! - Failed construction produces no record.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of employee classifications.
///
/// The role determines the display label only; records carry the same fields
/// regardless of variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Developer,
    Hr,
}

impl Role {
    /// Canonical display label for this role.
    pub fn label(self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Hr => "HR",
        }
    }

    /// Parses a user-supplied role label.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for
    /// anything outside the closed label set.
    pub fn parse_label(value: &str) -> Option<Role> {
        match value.trim().to_ascii_lowercase().as_str() {
            "manager" => Some(Role::Manager),
            "developer" => Some(Role::Developer),
            "hr" => Some(Role::Hr),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical roster record.
///
/// `Clone` backs the copy-on-write edit flow: edits build a fresh record and
/// replace the stored one wholesale instead of patching fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub role: Role,
    /// No sign or range constraint; stored exactly as entered.
    pub salary: f64,
    pub department: String,
}

/// Raw field values collected from the console before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    /// Raw role label; validated in [`Employee::from_draft`].
    pub role: String,
    pub salary: f64,
    pub department: String,
}

/// Construction error for draft validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeBuildError {
    /// Role label does not match any known classification.
    InvalidRole { role: String },
}

impl Display for EmployeeBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole { role } => {
                write!(f, "invalid role `{role}`; expected Manager, Developer or HR")
            }
        }
    }
}

impl Error for EmployeeBuildError {}

impl Employee {
    /// Builds a record from raw draft fields.
    ///
    /// # Contract
    /// - Role matching is case-insensitive against the closed label set.
    /// - Name, salary and department are stored as given; empty text and
    ///   non-positive salary are accepted.
    ///
    /// # Errors
    /// - `EmployeeBuildError::InvalidRole` carrying the rejected label when it
    ///   matches none of the three known roles.
    pub fn from_draft(draft: EmployeeDraft) -> Result<Employee, EmployeeBuildError> {
        let role = Role::parse_label(&draft.role)
            .ok_or(EmployeeBuildError::InvalidRole { role: draft.role })?;

        Ok(Employee {
            name: draft.name,
            role,
            salary: draft.salary,
            department: draft.department,
        })
    }

    /// Renders the bordered console detail block for this record.
    pub fn detail_block(&self) -> String {
        format!(
            "=====================================\n\
             Employee Name  : {}\n\
             Role           : {}\n\
             Salary         : {}\n\
             Department     : {}\n\
             =====================================",
            self.name, self.role, self.salary, self.department
        )
    }
}
