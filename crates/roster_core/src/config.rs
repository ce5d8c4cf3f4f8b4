//! Runtime configuration for the roster core.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use crate::logging::default_log_level;
use crate::validate::phone::{PhoneRule, MAX_PHONE_LENGTH};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DEPARTMENT_PHONE_DIGITS: usize = 10;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// SQLite file; `None` means an in-memory store.
    pub db_path: Option<PathBuf>,
    /// File logging; `None` leaves logging uninitialized.
    pub logging: Option<LoggingConfig>,
    pub validation: ValidationConfig,
    /// Wipe and reload the demo departments/employees after opening.
    pub seed_demo_data: bool,
}

/// Validator settings shared by both services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub phone: PhoneRule,
    pub department_phone_digits: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            phone: PhoneRule::default(),
            department_phone_digits: DEFAULT_DEPARTMENT_PHONE_DIGITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level_string")]
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }
}

fn default_level_string() -> String {
    default_log_level().to_string()
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.validation.phone.length;
        if length == 0 || length > MAX_PHONE_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "validation.phone.length must be between 1 and {MAX_PHONE_LENGTH}, got {length}"
            )));
        }
        if self.validation.department_phone_digits == 0 {
            return Err(ConfigError::Invalid(
                "validation.department_phone_digits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::logging::default_log_level;

    #[test]
    fn empty_object_yields_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.validation.phone.length, 9);
        assert!(config.validation.phone.allow_international);
        assert_eq!(config.validation.department_phone_digits, 10);
    }

    #[test]
    fn partial_phone_rule_keeps_remaining_defaults() {
        let config = CoreConfig::from_json_str(
            r#"{
                "db_path": "/var/lib/roster/roster.sqlite3",
                "logging": { "log_dir": "/var/log/roster" },
                "validation": { "phone": { "length": 10, "allow_international": false } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.validation.phone.length, 10);
        assert!(!config.validation.phone.allow_international);
        assert!(config.validation.phone.message.contains("{length}"));
        let logging = config.logging.unwrap();
        assert_eq!(logging.level, default_log_level());
        assert_eq!(logging.log_dir, "/var/log/roster");
    }

    #[test]
    fn zero_phone_length_is_rejected() {
        let err =
            CoreConfig::from_json_str(r#"{ "validation": { "phone": { "length": 0 } } }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_phone_length_is_rejected() {
        let err = CoreConfig::from_json_str(
            r#"{ "validation": { "phone": { "length": 18446744073709551615 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err =
            CoreConfig::from_json_str(r#"{ "validation": { "phone": { "length": 16 } } }"#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(
            CoreConfig::from_json_str(r#"{ "validation": { "phone": { "length": 15 } } }"#)
                .is_ok()
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoreConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
