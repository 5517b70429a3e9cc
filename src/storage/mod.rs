//! Storage layer for the net-worth tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each entity family has its own repository; [`Storage`] owns
//! them all together with the audit logger.

pub mod accounts;
pub mod file_io;
pub mod history;
pub mod income;
pub mod transactions;
pub mod windfalls;

pub use accounts::AccountRepository;
pub use file_io::{read_json, write_json_atomic};
pub use history::HistoryRepository;
pub use income::IncomeRepository;
pub use transactions::TransactionRepository;
pub use windfalls::WindfallRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::NetWorthPaths;
use crate::error::NetWorthError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: NetWorthPaths,
    pub accounts: AccountRepository,
    pub income: IncomeRepository,
    pub windfalls: WindfallRepository,
    pub transactions: TransactionRepository,
    pub history: HistoryRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: NetWorthPaths) -> Result<Self, NetWorthError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            income: IncomeRepository::new(paths.income_file()),
            windfalls: WindfallRepository::new(paths.windfalls_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            history: HistoryRepository::new(paths.history_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &NetWorthPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), NetWorthError> {
        self.accounts.load()?;
        self.income.load()?;
        self.windfalls.load()?;
        self.transactions.load()?;
        self.history.load()?;
        tracing::debug!(base_dir = %self.paths.base_dir().display(), "storage loaded");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), NetWorthError> {
        self.accounts.save()?;
        self.income.save()?;
        self.windfalls.save()?;
        self.transactions.save()?;
        self.history.save()?;
        Ok(())
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), NetWorthError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), NetWorthError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), NetWorthError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
