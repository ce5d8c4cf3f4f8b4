//! Service failure type shared by both services.

use crate::repo::RepoError;
use crate::validate::ValidationErrors;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure category a transport layer maps to its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    NotFound,
    AlreadyExists,
    ValidationFailed,
    StoreError,
}

impl ServiceErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::ValidationFailed => "validation_failed",
            Self::StoreError => "store_error",
        }
    }
}

#[derive(Debug)]
pub enum ServiceError {
    /// No `entity` matches the lookup named by `key`.
    NotFound {
        entity: &'static str,
        key: &'static str,
    },
    /// Another `entity` already holds the unique `key`.
    AlreadyExists {
        entity: &'static str,
        key: &'static str,
    },
    Validation(ValidationErrors),
    /// Repository failure, passed through unchanged.
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::NotFound { .. } => ServiceErrorKind::NotFound,
            Self::AlreadyExists { .. } => ServiceErrorKind::AlreadyExists,
            Self::Validation(_) => ServiceErrorKind::ValidationFailed,
            Self::Repo(_) => ServiceErrorKind::StoreError,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, key } => write!(f, "{entity} not found by {key}"),
            Self::AlreadyExists { entity, key } => {
                write!(f, "{entity} with the same {key} already exists")
            }
            Self::Validation(errors) => write!(f, "validation failed: {errors}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}
