//! Department use-case service.
//!
//! # Invariants
//! - Department names are unique ignoring case; create checks first.
//! - New departments get ids from the configured `DepartmentIdGenerator`.
//! - Update is keyed by name (natural key), not by id.
//! - Delete does not check prior existence.

use crate::config::ValidationConfig;
use crate::dto::DepartmentDto;
use crate::mapper::{department_to_dto, department_to_entity};
use crate::model::department::DepartmentId;
use crate::repo::department_repo::DepartmentRepository;
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::policy::{DepartmentIdGenerator, RandomDepartmentIds};
use crate::validate::validate_department;
use log::{info, warn};

const ENTITY: &str = "department";

pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
    ids: Box<dyn DepartmentIdGenerator>,
    validation: ValidationConfig,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    /// Uses random ids and default validation rules.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            ids: Box::new(RandomDepartmentIds),
            validation: ValidationConfig::default(),
        }
    }

    /// Replaces the id source used by `create`.
    pub fn with_id_generator(mut self, ids: impl DepartmentIdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Replaces the field rules checked by `create` and `update`.
    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    /// Returns every department ordered by name.
    pub fn list_all(&self) -> ServiceResult<Vec<DepartmentDto>> {
        let departments = self.repo.find_all()?;
        Ok(departments.iter().map(department_to_dto).collect())
    }

    /// Returns the department with `id`, or `NotFound`.
    pub fn get_by_id(&self, id: DepartmentId) -> ServiceResult<DepartmentDto> {
        self.repo
            .find_by_id(id)?
            .map(|department| department_to_dto(&department))
            .ok_or(ServiceError::NotFound {
                entity: ENTITY,
                key: "id",
            })
    }

    /// Creates a department with a generated id.
    ///
    /// # Errors
    /// - `Validation` for missing name/code or a malformed phone.
    /// - `AlreadyExists` when the name is taken, in any case.
    pub fn create(&self, input: &DepartmentDto) -> ServiceResult<DepartmentDto> {
        validate_department(input, &self.validation)?;
        let name = input.name.trim();

        if self.repo.find_by_name_ignore_case(name)?.is_some() {
            warn!("event=department_create module=service status=rejected reason=name_taken");
            return Err(ServiceError::AlreadyExists {
                entity: ENTITY,
                key: "name",
            });
        }

        let mut department = department_to_entity(input);
        department.name = name.to_string();
        department.id = Some(self.ids.next_id());
        let saved = self.repo.save(&department)?;

        info!(
            "event=department_create module=service status=ok department_id={}",
            saved.id.unwrap_or_default()
        );
        Ok(department_to_dto(&saved))
    }

    /// Overwrites the department whose name matches `input.name`, ignoring
    /// case. The stored id is kept; any id in `input` is ignored.
    ///
    /// # Errors
    /// - `Validation` for invalid input.
    /// - `NotFound` when no department has that name.
    pub fn update(&self, input: &DepartmentDto) -> ServiceResult<bool> {
        validate_department(input, &self.validation)?;
        let name = input.name.trim();

        let existing =
            self.repo
                .find_by_name_ignore_case(name)?
                .ok_or(ServiceError::NotFound {
                    entity: ENTITY,
                    key: "name",
                })?;

        let mut updated = department_to_entity(input);
        updated.name = name.to_string();
        updated.id = existing.id;
        self.repo.save(&updated)?;

        info!(
            "event=department_update module=service status=ok department_id={}",
            existing.id.unwrap_or_default()
        );
        Ok(true)
    }

    /// Requests deletion; employees of the department go with it.
    pub fn delete(&self, id: DepartmentId) -> ServiceResult<bool> {
        self.repo.delete_by_id(id)?;
        info!("event=department_delete module=service status=ok department_id={id}");
        Ok(true)
    }
}
