//! Error types
//!
//! Errors travel through configuration, storage and services only. The
//! projection engine is total and never produces one.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetWorthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input or an entity that fails its own invariants
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A data file could not be read, parsed or replaced
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV report output failed
    #[error("Export error: {0}")]
    Export(String),
}

macro_rules! not_found_constructors {
    ($($fn_name:ident => $label:literal),* $(,)?) => {
        $(
            pub fn $fn_name(identifier: impl Into<String>) -> Self {
                Self::NotFound {
                    entity_type: $label,
                    identifier: identifier.into(),
                }
            }
        )*
    };
}

impl NetWorthError {
    not_found_constructors! {
        account_not_found => "Account",
        income_source_not_found => "Income source",
        allocation_not_found => "Budget allocation",
        windfall_not_found => "Windfall",
        transaction_not_found => "Transaction",
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for NetWorthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NetWorthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for NetWorthError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for net-worth tracker operations
pub type NetWorthResult<T> = Result<T, NetWorthError>;
