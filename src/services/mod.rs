//! Service layer for the net-worth tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, audit logging, and the conversion of persisted entities into
//! projection inputs.

pub mod account;
pub mod income;
pub mod projection;
pub mod snapshot;
pub mod transaction;
pub mod windfall;

pub use account::AccountService;
pub use income::IncomeService;
pub use projection::ProjectionService;
pub use snapshot::SnapshotService;
pub use transaction::TransactionService;
pub use windfall::WindfallService;
