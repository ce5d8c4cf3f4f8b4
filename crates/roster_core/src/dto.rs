//! Transport representation of roster records.
//!
//! These are what a REST layer would (de)serialize. Field names are
//! camelCase on the wire; audit timestamps are epoch milliseconds.

use crate::model::department::DepartmentId;
use crate::model::employee::EmployeeId;
use serde::{Deserialize, Serialize};

/// Audit fields carried by every DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    /// Assigned on create; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DepartmentId>,
    pub name: String,
    pub department_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// Assigned by the store; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub email: String,
    pub phone_number: String,
    /// Denormalized from the employee's department on output; used to
    /// resolve the department on create.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}
