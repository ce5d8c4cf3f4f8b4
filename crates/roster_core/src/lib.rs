//! Department/employee roster core.
//! Owns the data invariants: uniqueness, department assignment, field shapes.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod validate;

pub use config::{ConfigError, CoreConfig, LoggingConfig, ValidationConfig};
pub use dto::{AuditDto, DepartmentDto, EmployeeDto};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::audit::Audit;
pub use model::department::{Department, DepartmentId};
pub use model::employee::{Employee, EmployeeId};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::{seed_demo_data, SeedSummary};
pub use service::department_service::DepartmentService;
pub use service::employee_service::EmployeeService;
pub use service::error::{ServiceError, ServiceErrorKind, ServiceResult};
pub use service::policy::{
    DepartmentIdGenerator, DepartmentPicker, RandomDepartmentIds, RandomDepartmentPicker,
    SequentialDepartmentIds, FALLBACK_DEPARTMENTS,
};
pub use validate::{FieldError, PhoneRule, ValidationErrors};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
