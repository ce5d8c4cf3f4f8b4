//! Employee use-case service.
//!
//! # Responsibility
//! - Enforce phone-number uniqueness and existence checks.
//! - Resolve the department of new employees, falling back to the
//!   `DepartmentPicker` policy.
//!
//! # Invariants
//! - Phone number is the natural key for update.
//! - Update never changes an employee's department.
//! - Names, email and phone are trimmed before validation and storage.

use crate::config::ValidationConfig;
use crate::dto::EmployeeDto;
use crate::mapper::{employee_to_dto, employee_to_entity, employees_to_dtos};
use crate::model::department::{Department, DepartmentId};
use crate::model::employee::EmployeeId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::policy::{
    fallback_department_code, DepartmentIdGenerator, DepartmentPicker, RandomDepartmentIds,
    RandomDepartmentPicker,
};
use crate::validate::validate_employee;
use log::{info, warn};

const ENTITY: &str = "employee";

pub struct EmployeeService<E: EmployeeRepository, D: DepartmentRepository> {
    employees: E,
    departments: D,
    ids: Box<dyn DepartmentIdGenerator>,
    picker: Box<dyn DepartmentPicker>,
    validation: ValidationConfig,
}

impl<E: EmployeeRepository, D: DepartmentRepository> EmployeeService<E, D> {
    /// Uses random fallback assignment, random department ids and default
    /// validation rules.
    pub fn new(employees: E, departments: D) -> Self {
        Self {
            employees,
            departments,
            ids: Box::new(RandomDepartmentIds),
            picker: Box::new(RandomDepartmentPicker),
            validation: ValidationConfig::default(),
        }
    }

    /// Id source for departments created by fallback assignment.
    pub fn with_id_generator(mut self, ids: impl DepartmentIdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Policy naming the department of employees without a resolvable one.
    pub fn with_department_picker(mut self, picker: impl DepartmentPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Replaces the field rules checked by `create` and `update`.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Returns every employee in id order.
    pub fn list_all(&self) -> ServiceResult<Vec<EmployeeDto>> {
        Ok(employees_to_dtos(&self.employees.find_all()?))
    }

    /// Returns the employee with `id`, or `NotFound`.
    pub fn get_by_id(&self, id: EmployeeId) -> ServiceResult<EmployeeDto> {
        self.employees
            .find_by_id(id)?
            .map(|employee| employee_to_dto(&employee))
            .ok_or(not_found("id"))
    }

    /// Looks up by trimmed name and last name, ignoring case.
    pub fn get_by_name_and_last_name(
        &self,
        name: &str,
        last_name: &str,
    ) -> ServiceResult<EmployeeDto> {
        self.employees
            .find_by_name_and_last_name_ignore_case(name.trim(), last_name.trim())?
            .map(|employee| employee_to_dto(&employee))
            .ok_or(not_found("name and last name"))
    }

    /// Looks up by trimmed phone number.
    pub fn get_by_phone(&self, phone_number: &str) -> ServiceResult<EmployeeDto> {
        self.employees
            .find_by_phone_number(phone_number.trim())?
            .map(|employee| employee_to_dto(&employee))
            .ok_or(not_found("phone number"))
    }

    /// Looks up by trimmed email, matched exactly.
    pub fn get_by_email(&self, email: &str) -> ServiceResult<EmployeeDto> {
        self.employees
            .find_by_email(email.trim())?
            .map(|employee| employee_to_dto(&employee))
            .ok_or(not_found("email"))
    }

    /// Employees of one department; `NotFound` when the department is absent.
    pub fn list_by_department(
        &self,
        department_id: DepartmentId,
    ) -> ServiceResult<Vec<EmployeeDto>> {
        if self.departments.find_by_id(department_id)?.is_none() {
            return Err(ServiceError::NotFound {
                entity: "department",
                key: "id",
            });
        }
        Ok(employees_to_dtos(
            &self.employees.find_by_department_id(department_id)?,
        ))
    }

    /// Employees whose first name contains `fragment`, ignoring case. A blank
    /// fragment matches nothing.
    pub fn search_by_name(&self, fragment: &str) -> ServiceResult<Vec<EmployeeDto>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(Vec::new());
        }
        Ok(employees_to_dtos(
            &self.employees.find_by_name_containing_ignore_case(fragment)?,
        ))
    }

    /// Creates an employee in a resolved or fallback-assigned department.
    ///
    /// # Errors
    /// - `Validation` for blank names or malformed email/phone.
    /// - `AlreadyExists` when the phone number is taken.
    pub fn create(&self, input: &EmployeeDto) -> ServiceResult<EmployeeDto> {
        let input = normalized(input);
        validate_employee(&input, &self.validation)?;

        if self
            .employees
            .find_by_phone_number(&input.phone_number)?
            .is_some()
        {
            warn!("event=employee_create module=service status=rejected reason=phone_taken");
            return Err(ServiceError::AlreadyExists {
                entity: ENTITY,
                key: "phone number",
            });
        }

        let department = self.resolve_department(&input)?;
        let mut employee = employee_to_entity(&input);
        employee.department = Some(department);
        let saved = self.employees.save(&employee)?;

        info!(
            "event=employee_create module=service status=ok employee_id={} department_id={}",
            saved.id.unwrap_or_default(),
            saved.department_id().unwrap_or_default()
        );
        Ok(employee_to_dto(&saved))
    }

    /// Overwrites the employee holding `input.phone_number`.
    ///
    /// The stored id and department are kept whatever `input` says.
    pub fn update(&self, input: &EmployeeDto) -> ServiceResult<bool> {
        let input = normalized(input);
        validate_employee(&input, &self.validation)?;

        let existing = self
            .employees
            .find_by_phone_number(&input.phone_number)?
            .ok_or(not_found("phone number"))?;

        let mut updated = employee_to_entity(&input);
        updated.id = existing.id;
        updated.department = existing.department;
        self.employees.save(&updated)?;

        info!(
            "event=employee_update module=service status=ok employee_id={}",
            existing.id.unwrap_or_default()
        );
        Ok(true)
    }

    /// Deletes the employee with `id`; `NotFound` when there is none.
    pub fn delete(&self, id: EmployeeId) -> ServiceResult<bool> {
        if self.employees.find_by_id(id)?.is_none() {
            return Err(not_found("id"));
        }
        self.employees.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok employee_id={id}");
        Ok(true)
    }

    /// Explicit id (when its name agrees with any given name), then explicit
    /// name, then the fallback policy.
    fn resolve_department(&self, input: &EmployeeDto) -> ServiceResult<Department> {
        let requested_name = input
            .department_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        if let Some(id) = input.department_id {
            if let Some(department) = self.departments.find_by_id(id)? {
                if requested_name.map_or(true, |name| department.has_name(name)) {
                    return Ok(department);
                }
            }
        }

        if let Some(name) = requested_name {
            if let Some(department) = self.departments.find_by_name_ignore_case(name)? {
                return Ok(department);
            }
        }

        self.assign_fallback_department()
    }

    /// Reuses the department named by the picker, creating it when absent.
    fn assign_fallback_department(&self) -> ServiceResult<Department> {
        let name = self.picker.pick();
        if let Some(existing) = self.departments.find_by_name_ignore_case(name)? {
            return Ok(existing);
        }

        let mut department = Department::new(name, fallback_department_code(name));
        department.id = Some(self.ids.next_id());
        let saved = self.departments.save(&department)?;
        info!(
            "event=department_fallback_create module=service status=ok department_id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }
}

fn not_found(key: &'static str) -> ServiceError {
    ServiceError::NotFound {
        entity: ENTITY,
        key,
    }
}

fn normalized(input: &EmployeeDto) -> EmployeeDto {
    EmployeeDto {
        name: input.name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone_number: input.phone_number.trim().to_string(),
        ..input.clone()
    }
}
