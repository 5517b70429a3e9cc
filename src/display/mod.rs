//! Display formatting for terminal output
//!
//! Table formatting for the list commands. Projection output lives in
//! `reports` instead.

pub mod account;
pub mod income;
pub mod ledger;

pub use account::format_account_list;
pub use income::{format_allocation_list, format_income_list};
pub use ledger::{format_snapshot_list, format_transaction_list, format_windfall_list};
