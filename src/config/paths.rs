//! Path management for the net-worth tracker
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `NETWORTH_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/networth-cli` or `~/.config/networth-cli`
//! 3. Windows: `%APPDATA%\networth-cli`

use std::path::PathBuf;

use crate::error::NetWorthError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "NETWORTH_CLI_DATA_DIR";

/// Manages all paths used by the tracker
#[derive(Debug, Clone)]
pub struct NetWorthPaths {
    base_dir: PathBuf,
}

impl NetWorthPaths {
    /// Create a new NetWorthPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NetWorthError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create NetWorthPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/networth-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/networth-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Income sources and their budget allocations share one file
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    pub fn windfalls_file(&self) -> PathBuf {
        self.data_dir().join("windfalls.json")
    }

    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to the net worth history (snapshots)
    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), NetWorthError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NetWorthError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| NetWorthError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, NetWorthError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                NetWorthError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("networth-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, NetWorthError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| NetWorthError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("networth-cli"))
}
