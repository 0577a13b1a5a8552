//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate draft validation and repository calls into use-case APIs.
//! - Keep the console adapter decoupled from storage details.

pub mod employee_service;
