//! Repository layer abstractions and the in-memory roster.
//!
//! # Responsibility
//! - Define the roster data-access contract used by service orchestration.
//! - Isolate storage-order bookkeeping from business logic.
//!
//! # Invariants
//! - Insertion order is display order; reads never reorder.
//! - Repository APIs return semantic errors (`IndexOutOfRange`) instead of
//!   panicking on bad positions.

pub mod employee_repo;
