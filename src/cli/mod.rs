//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod audit;
pub mod income;
pub mod project;
pub mod snapshot;
pub mod transaction;
pub mod windfall;

pub use account::{handle_account_command, AccountCommands};
pub use audit::handle_audit_command;
pub use income::{handle_allocation_command, handle_income_command, AllocationCommands, IncomeCommands};
pub use project::{handle_goal_command, handle_project_command, ProjectCommands};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use windfall::{handle_windfall_command, WindfallCommands};

use chrono::NaiveDate;

use crate::error::{NetWorthError, NetWorthResult};
use crate::models::Money;

/// Parse a user-entered amount such as `1,250.00` or `-40`
pub(crate) fn parse_amount(input: &str) -> NetWorthResult<Money> {
    Money::parse(input).map_err(|e| {
        NetWorthError::Validation(format!(
            "Invalid amount '{}': {}. Use a format like '1000.00' or '1000'",
            input, e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> NetWorthResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        NetWorthError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD",
            input
        ))
    })
}
