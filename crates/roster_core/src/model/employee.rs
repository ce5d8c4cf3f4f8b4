//! Employee entity.

use crate::model::audit::Audit;
use crate::model::department::{Department, DepartmentId};

/// Numeric employee key, assigned by the store on first save.
pub type EmployeeId = i64;

/// Person record belonging to exactly one department.
///
/// `phone_number` is the natural key used by updates and is unique across
/// all employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub email: String,
    pub phone_number: String,
    /// Required for persistence; `None` only while a department is being
    /// resolved.
    pub department: Option<Department>,
    pub audit: Audit,
}

impl Employee {
    /// Id of the attached department, when both are known.
    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.as_ref().and_then(|department| department.id)
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department
            .as_ref()
            .map(|department| department.name.as_str())
    }
}
