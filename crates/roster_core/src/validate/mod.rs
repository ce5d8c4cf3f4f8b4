//! Field-level validation for roster input.
//!
//! # Responsibility
//! - Provide pure shape checks for phone numbers and email addresses.
//! - Collect every field failure of one DTO before a service mutates state.
//!
//! # Invariants
//! - Checks never rewrite input; a failing value is reported, not corrected.
//! - Checks depend only on (input, configuration).

use crate::config::ValidationConfig;
use crate::dto::{DepartmentDto, EmployeeDto};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod email;
pub mod phone;

pub use email::{check_email, is_valid_email};
pub use phone::{check_department_phone, check_phone, is_valid_phone, PhoneRule};

/// One failed field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field failure found in one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns whether `field` failed at least one check.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    fn record(&mut self, field: &'static str, check: Result<(), String>) {
        if let Err(message) = check {
            self.errors.push(FieldError { field, message });
        }
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

/// Validates department input: name and code are required, phone is empty
/// or exactly `config.department_phone_digits` digits.
pub fn validate_department(
    dto: &DepartmentDto,
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.record("name", require(&dto.name, "Department name is required"));
    errors.record(
        "departmentCode",
        require(&dto.department_code, "Department code is required"),
    );
    errors.record(
        "phoneNumber",
        check_department_phone(dto.phone_number.as_deref(), config.department_phone_digits),
    );
    errors.into_result()
}

/// Validates employee input: names are required, email and phone must match
/// their configured shapes.
pub fn validate_employee(
    dto: &EmployeeDto,
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.record("name", require(&dto.name, "Name is required"));
    errors.record("lastName", require(&dto.last_name, "Last name is required"));
    errors.record("email", check_email(Some(dto.email.as_str())));
    errors.record(
        "phoneNumber",
        check_phone(Some(dto.phone_number.as_str()), &config.phone),
    );
    errors.into_result()
}

fn require(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}
