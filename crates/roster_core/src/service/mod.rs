//! Roster use-case services.
//!
//! # Responsibility
//! - Enforce uniqueness, existence and department-assignment rules above the
//!   repository ports.
//! - Speak DTOs to callers and entities to repositories.
//!
//! # Invariants
//! - Input is validated before any store access.
//! - Check-then-write sequences are not atomic; store constraints are the
//!   backstop under concurrent writers.

pub mod department_service;
pub mod employee_service;
pub mod error;
pub mod policy;
