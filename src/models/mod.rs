//! Core data models for the net-worth tracker
//!
//! These are the persisted entities: accounts, income sources and their
//! budget allocations, windfalls, ledger transactions and net-worth
//! snapshots. The projection engine never sees them directly; services
//! convert them into plain projection rows first.

pub mod account;
pub mod budget;
pub mod ids;
pub mod income;
pub mod money;
pub mod snapshot;
pub mod transaction;
pub mod windfall;

pub use account::{Account, AccountType};
pub use budget::{AllocationUnit, BudgetAllocation};
pub use ids::{AccountId, AllocationId, IncomeSourceId, SnapshotId, TransactionId, WindfallId};
pub use income::{IncomeSource, IncomeType, PayFrequency};
pub use money::{Money, MoneyParseError};
pub use snapshot::NetWorthSnapshot;
pub use transaction::{Transaction, TransactionKind};
pub use windfall::{Windfall, WindfallType};
