//! Transaction repository for JSON storage
//!
//! Manages loading and saving ledger transactions to transactions.json,
//! with a per-year index for projection lookups.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::Datelike;

use crate::error::NetWorthError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with indexing
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: calendar year -> transaction_ids
    by_year: RwLock<HashMap<i32, Vec<TransactionId>>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_year: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build indexes
    pub fn load(&self) -> Result<(), NetWorthError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_year = self.by_year.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_year.clear();

        for txn in file_data.transactions {
            by_year.entry(txn.date.year()).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), NetWorthError> {
        let transactions = self.get_all()?;
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, oldest date first
    pub fn get_all(&self) -> Result<Vec<Transaction>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        sort_by_date(&mut transactions);
        Ok(transactions)
    }

    /// Get transactions dated within one calendar year
    pub fn get_by_year(&self, year: i32) -> Result<Vec<Transaction>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_year = self.by_year.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_year.get(&year).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        sort_by_date(&mut transactions);
        Ok(transactions)
    }

    /// Find a transaction by short ID
    pub fn find_by_id(&self, identifier: &str) -> Result<Option<Transaction>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|t| t.id.matches(identifier)).cloned())
    }

    /// Insert or update a transaction, keeping the year index current
    pub fn upsert(&self, txn: Transaction) -> Result<(), NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_year = self.by_year.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_year.get_mut(&old.date.year()) {
                ids.retain(|id| *id != txn.id);
            }
        }

        by_year.entry(txn.date.year()).or_default().push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_year = self.by_year.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let removed = data.remove(&id);
        if let Some(txn) = &removed {
            if let Some(ids) = by_year.get_mut(&txn.date.year()) {
                ids.retain(|existing| *existing != id);
            }
        }

        Ok(removed)
    }

}

fn sort_by_date(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
}
