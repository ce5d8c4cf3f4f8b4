//! Persisted roster records.
//!
//! # Responsibility
//! - Define the entity shapes the repositories read and write.
//! - Keep transport concerns (DTOs, serde naming) out of the store shape.
//!
//! # Invariants
//! - A persisted `Employee` always carries its `Department`.
//! - Audit timestamps are epoch milliseconds.

pub mod audit;
pub mod department;
pub mod employee;
