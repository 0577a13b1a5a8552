//! Domain model for the employee roster.
//!
//! # Responsibility
//! - Define the canonical employee record used by core business logic.
//! - Own role-label parsing and draft-to-record construction.
//!
//! # Invariants
//! - The role set is closed; unknown labels never produce a record.
//! - Records are validated once at construction, never after.

pub mod employee;
