//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NetWorthError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable account data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), NetWorthError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &AccountData { accounts })
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all accounts, sorted by name
    pub fn get_all(&self) -> Result<Vec<Account>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut accounts: Vec<_> = data.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(accounts)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Find an account whose ID matches a short or prefixed identifier
    pub fn find_by_id(&self, identifier: &str) -> Result<Option<Account>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|a| a.id.matches(identifier)).cloned())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: Account) -> Result<(), NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(account.id, account);
        Ok(())
    }

    /// Delete an account
    pub fn delete(&self, id: AccountId) -> Result<bool, NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if an account name is already taken
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<AccountId>,
    ) -> Result<bool, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|a| a.name.to_lowercase() == name_lower && Some(a.id) != exclude_id))
    }
}
