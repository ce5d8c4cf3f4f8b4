//! Entity ⇄ DTO conversion.
//!
//! # Invariants
//! - Audit fields are copied both ways unchanged.
//! - `employee_to_dto` denormalizes the department id and name.
//! - `employee_to_entity` never attaches a department: resolving it is the
//!   employee service's job.

use crate::dto::{AuditDto, DepartmentDto, EmployeeDto};
use crate::model::audit::Audit;
use crate::model::department::Department;
use crate::model::employee::Employee;

pub fn audit_to_dto(audit: &Audit) -> AuditDto {
    AuditDto {
        created_at: audit.created_at,
        created_by: audit.created_by.clone(),
        updated_at: audit.updated_at,
        updated_by: audit.updated_by.clone(),
    }
}

pub fn audit_to_entity(dto: &AuditDto) -> Audit {
    Audit {
        created_at: dto.created_at,
        created_by: dto.created_by.clone(),
        updated_at: dto.updated_at,
        updated_by: dto.updated_by.clone(),
    }
}

pub fn department_to_dto(department: &Department) -> DepartmentDto {
    DepartmentDto {
        id: department.id,
        name: department.name.clone(),
        department_code: department.department_code.clone(),
        description: department.description.clone(),
        building: department.building.clone(),
        phone_number: department.phone_number.clone(),
        audit: audit_to_dto(&department.audit),
    }
}

/// Builds an unsaved department; `id` stays `None` regardless of input.
pub fn department_to_entity(dto: &DepartmentDto) -> Department {
    Department {
        id: None,
        name: dto.name.clone(),
        department_code: dto.department_code.clone(),
        description: dto.description.clone(),
        building: dto.building.clone(),
        phone_number: dto.phone_number.clone(),
        audit: audit_to_entity(&dto.audit),
    }
}

pub fn employee_to_dto(employee: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        last_name: employee.last_name.clone(),
        address: employee.address.clone(),
        email: employee.email.clone(),
        phone_number: employee.phone_number.clone(),
        department_id: employee.department_id(),
        department_name: employee.department_name().map(str::to_string),
        audit: audit_to_dto(&employee.audit),
    }
}

pub fn employees_to_dtos(employees: &[Employee]) -> Vec<EmployeeDto> {
    employees.iter().map(employee_to_dto).collect()
}

pub fn employee_to_entity(dto: &EmployeeDto) -> Employee {
    Employee {
        id: None,
        name: dto.name.clone(),
        last_name: dto.last_name.clone(),
        address: dto.address.clone(),
        email: dto.email.clone(),
        phone_number: dto.phone_number.clone(),
        department: None,
        audit: audit_to_entity(&dto.audit),
    }
}
