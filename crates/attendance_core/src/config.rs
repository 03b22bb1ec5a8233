//! Runtime configuration for attendance callers.
//!
//! # Responsibility
//! - Hold typed defaults for logging and reporting policy.
//! - Apply `ATTENDANCE_*` environment overrides.
//!
//! # Invariants
//! - The default log directory is absolute.
//! - Environment values that fail to parse are reported, never ignored.

use crate::logging::default_log_level;
use crate::service::report_service::StatusBands;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "ATTENDANCE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ATTENDANCE_LOG_DIR";
pub const ENV_LOW_THRESHOLD: &str = "ATTENDANCE_LOW_THRESHOLD";

const DEFAULT_LOW_ATTENDANCE_THRESHOLD: f64 = 75.0;
const DEFAULT_LOG_DIR_NAME: &str = "attendance-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Application settings resolved at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
    /// Default cut-off offered by the low-attendance view.
    pub low_attendance_threshold: f64,
    pub bands: StatusBands,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir()
                .join(DEFAULT_LOG_DIR_NAME)
                .to_string_lossy()
                .into_owned(),
            low_attendance_threshold: DEFAULT_LOW_ATTENDANCE_THRESHOLD,
            bands: StatusBands::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level.trim().to_string();
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = dir.trim().to_string();
        }
        if let Some(raw) = read(ENV_LOW_THRESHOLD) {
            config.low_attendance_threshold =
                raw.trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: ENV_LOW_THRESHOLD,
                        value: raw.clone(),
                    })?;
        }

        Ok(config)
    }
}
