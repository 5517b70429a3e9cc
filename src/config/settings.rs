//! User settings for the net-worth tracker
//!
//! Manages display preferences and the length of the rolling chart window.

use serde::{Deserialize, Serialize};

use super::paths::NetWorthPaths;
use crate::error::NetWorthError;
use crate::projection::{DEFAULT_ROLLING_DAYS, MAX_ROLLING_DAYS};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of trailing days shown by `project rolling`
    #[serde(default = "default_rolling_window_days")]
    pub rolling_window_days: u32,

    /// Whether `init` has been run
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_rolling_window_days() -> u32 {
    DEFAULT_ROLLING_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            rolling_window_days: default_rolling_window_days(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load `config.json`, falling back to defaults when it does not exist.
    ///
    /// Defaults are not written back; `init` persists them.
    pub fn load_or_create(paths: &NetWorthPaths) -> Result<Self, NetWorthError> {
        let settings: Settings = read_json(paths.settings_file()).map_err(|e| match e {
            NetWorthError::Storage(msg) => NetWorthError::Config(msg),
            other => other,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), NetWorthError> {
        if !(1..=MAX_ROLLING_DAYS).contains(&self.rolling_window_days) {
            return Err(NetWorthError::Config(format!(
                "rolling_window_days must be between 1 and {}, got {}",
                MAX_ROLLING_DAYS, self.rolling_window_days
            )));
        }
        Ok(())
    }

    pub fn save(&self, paths: &NetWorthPaths) -> Result<(), NetWorthError> {
        write_json_atomic(paths.settings_file(), self).map_err(|e| match e {
            NetWorthError::Storage(msg) => NetWorthError::Config(msg),
            other => other,
        })
    }
}
