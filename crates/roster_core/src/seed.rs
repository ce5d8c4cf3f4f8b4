//! Demo roster for local runs.
//!
//! Wipes both tables and loads two departments with five employees in one
//! transaction. Writes go straight through the repositories.

use crate::model::audit::Audit;
use crate::model::department::{Department, DepartmentId};
use crate::model::employee::Employee;
use crate::repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
use crate::repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
use crate::repo::RepoResult;
use crate::service::policy::DepartmentIdGenerator;
use log::info;
use rusqlite::Connection;

const SEED_ACTOR: &str = "Admin";

/// Rows written by `seed_demo_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub employees: usize,
}

/// `(name, last name, address, email, phone, index into departments)`
const DEMO_EMPLOYEES: &[(&str, &str, &str, &str, &str, usize)] = &[
    ("Antonio", "Casadò", "123 Main St", "RiMw0@example.com", "123456789", 0),
    ("Alice", "Smith", "234 Main St", "sedeX@example.com", "223456789", 0),
    ("Bob", "Johnson", "353 Main St", "f9yjI@example.com", "323456789", 0),
    ("Clara", "White", "478 Main St", "qRZ0d@example.com", "423456789", 1),
    ("Maria", "Costa", "512 Main St", "V2I5I@example.com", "523456789", 1),
];

pub fn seed_demo_data(
    conn: &Connection,
    ids: &dyn DepartmentIdGenerator,
) -> RepoResult<SeedSummary> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch("DELETE FROM employees; DELETE FROM departments;")?;

    let summary = {
        let department_repo = SqliteDepartmentRepository::try_new(&tx)?;
        let employee_repo = SqliteEmployeeRepository::try_new(&tx)?;

        let departments = [
            department_repo.save(&demo_department(
                ids.next_id(),
                "Engineering",
                "ALG_101",
                "Engineers are the ones who make the machines work.",
                "Building 1, 1st floor",
            ))?,
            department_repo.save(&demo_department(
                ids.next_id(),
                "Human Resources",
                "HR_301",
                "HR are the ones who take cares of employees issues.",
                "Building 2, 1st floor",
            ))?,
        ];

        for &(name, last_name, address, email, phone, department_index) in DEMO_EMPLOYEES {
            employee_repo.save(&Employee {
                id: None,
                name: name.to_string(),
                last_name: last_name.to_string(),
                address: Some(address.to_string()),
                email: email.to_string(),
                phone_number: phone.to_string(),
                department: departments.get(department_index).cloned(),
                audit: Audit::created_by(SEED_ACTOR),
            })?;
        }

        SeedSummary {
            departments: departments.len(),
            employees: DEMO_EMPLOYEES.len(),
        }
    };

    tx.commit()?;
    info!(
        "event=seed_demo_data module=seed status=ok departments={} employees={}",
        summary.departments, summary.employees
    );
    Ok(summary)
}

fn demo_department(
    id: DepartmentId,
    name: &str,
    code: &str,
    description: &str,
    building: &str,
) -> Department {
    Department {
        id: Some(id),
        description: Some(description.to_string()),
        building: Some(building.to_string()),
        audit: Audit::created_by(SEED_ACTOR),
        ..Department::new(name, code)
    }
}
