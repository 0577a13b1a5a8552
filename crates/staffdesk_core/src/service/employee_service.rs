//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable add/list/edit entry points for console callers.
//! - Own the clone-and-overlay edit flow over the repository.
//!
//! # Invariants
//! - Failed validation never mutates the roster.
//! - Edits replace whole records; stored records are never patched in place.

use crate::model::employee::{Employee, EmployeeBuildError, EmployeeDraft};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case error combining construction and repository failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    Build(EmployeeBuildError),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EmployeeBuildError> for ServiceError {
    fn from(value: EmployeeBuildError) -> Self {
        Self::Build(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Field overrides for the edit flow.
///
/// `None` keeps the stored value. The role override carries the raw label and
/// is re-validated when the edit is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub salary: Option<f64>,
    pub department: Option<String>,
}

/// Use-case service wrapper for roster operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a draft and appends the resulting record.
    ///
    /// # Contract
    /// - Returns the stored record on success.
    /// - An invalid role label fails before any roster mutation.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> ServiceResult<Employee> {
        let employee = Employee::from_draft(draft)?;
        self.repo.append(employee.clone());
        info!(
            "event=employee_added module=service status=ok role={} roster_len={}",
            employee.role,
            self.repo.len()
        );
        Ok(employee)
    }

    /// Lists all records in insertion order.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.repo.list_all()
    }

    /// Gets one record by position.
    pub fn get_employee(&self, index: usize) -> Option<Employee> {
        self.repo.get(index)
    }

    /// Number of stored records.
    pub fn employee_count(&self) -> usize {
        self.repo.len()
    }

    /// Applies a clone-and-overlay edit at `index`.
    ///
    /// Reads the stored record, overlays every field the update carries,
    /// re-validates the resulting role label and replaces the stored record
    /// with the new one wholesale.
    ///
    /// # Errors
    /// - `ServiceError::Repo(IndexOutOfRange)` when `index` is not a stored
    ///   position.
    /// - `ServiceError::Build(InvalidRole)` when the role override is not a
    ///   known label.
    /// - Either failure leaves the roster unchanged.
    pub fn edit_employee(&mut self, index: usize, update: EmployeeUpdate) -> ServiceResult<Employee> {
        let current = self.repo.get(index).ok_or(RepoError::IndexOutOfRange {
            index,
            len: self.repo.len(),
        })?;

        let draft = EmployeeDraft {
            name: update.name.unwrap_or(current.name),
            role: update
                .role
                .unwrap_or_else(|| current.role.label().to_string()),
            salary: update.salary.unwrap_or(current.salary),
            department: update.department.unwrap_or(current.department),
        };

        let replacement = Employee::from_draft(draft)?;
        self.repo.replace_at(index, replacement.clone())?;
        info!(
            "event=employee_edited module=service status=ok index={index} role={}",
            replacement.role
        );
        Ok(replacement)
    }
}
