//! Department entity.

use crate::model::audit::Audit;

/// Numeric department key. Generated by a `DepartmentIdGenerator`, not by
/// the store.
pub type DepartmentId = i64;

/// Organizational unit. `name` is unique case-insensitively and
/// `department_code` is unique as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// `None` until an id has been assigned.
    pub id: Option<DepartmentId>,
    pub name: String,
    pub department_code: String,
    pub description: Option<String>,
    /// Building location inside the campus.
    pub building: Option<String>,
    /// Empty or exactly ten digits.
    pub phone_number: Option<String>,
    pub audit: Audit,
}

impl Department {
    pub fn new(name: impl Into<String>, department_code: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            department_code: department_code.into(),
            description: None,
            building: None,
            phone_number: None,
            audit: Audit::default(),
        }
    }

    /// Returns whether `other` names this department, ignoring case and
    /// surrounding whitespace.
    pub fn has_name(&self, other: &str) -> bool {
        self.name.trim().to_lowercase() == other.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::Department;

    #[test]
    fn has_name_ignores_case_and_padding() {
        let department = Department::new("Human Resources", "HR_301");
        assert!(department.has_name("  human resources "));
        assert!(!department.has_name("Human"));
    }
}
