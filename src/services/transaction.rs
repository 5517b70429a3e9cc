//! Transaction service
//!
//! Ledger entries recorded here are folded into the year projection in the
//! month they are dated.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for ledger transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction. `amount` must be non-negative.
    pub fn add(
        &self,
        name: &str,
        amount: Money,
        date: NaiveDate,
        kind: TransactionKind,
        tags: &[String],
    ) -> NetWorthResult<Transaction> {
        let txn = Transaction::new(name.trim(), amount, date, kind).with_tags(tags);
        txn.validate()
            .map_err(|e| NetWorthError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.name.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// All transactions, oldest first
    pub fn list(&self) -> NetWorthResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions dated within one calendar year
    pub fn for_year(&self, year: i32) -> NetWorthResult<Vec<Transaction>> {
        self.storage.transactions.get_by_year(year)
    }

    pub fn find(&self, identifier: &str) -> NetWorthResult<Option<Transaction>> {
        self.storage.transactions.find_by_id(identifier)
    }

    pub fn remove(&self, id: TransactionId) -> NetWorthResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| NetWorthError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.name.clone()),
            &txn,
        )?;

        Ok(txn)
    }
}
