//! Net worth history repository
//!
//! Snapshots are keyed by calendar date in history.json. A date holds at
//! most one snapshot, and reads always come back in ascending date order.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::NetWorthError;
use crate::models::NetWorthSnapshot;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct HistoryData {
    snapshots: Vec<NetWorthSnapshot>,
}

/// Repository for net worth snapshots
pub struct HistoryRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<NaiveDate, NetWorthSnapshot>>,
}

impl HistoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load snapshots from disk. A later entry for a date already seen wins.
    pub fn load(&self) -> Result<(), NetWorthError> {
        let file_data: HistoryData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for snapshot in file_data.snapshots {
            data.insert(snapshot.date, snapshot);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), NetWorthError> {
        let snapshots = self.get_all()?;
        write_json_atomic(&self.path, &HistoryData { snapshots })
    }

    pub fn get(&self, date: NaiveDate) -> Result<Option<NetWorthSnapshot>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&date).cloned())
    }

    /// Every snapshot in ascending date order
    pub fn get_all(&self) -> Result<Vec<NetWorthSnapshot>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().cloned().collect())
    }

    /// Snapshots dated between `start` and `end`, inclusive
    pub fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NetWorthSnapshot>, NetWorthError> {
        if start > end {
            return Ok(Vec::new());
        }

        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.range(start..=end).map(|(_, s)| s.clone()).collect())
    }

    /// Store a snapshot, replacing any snapshot already recorded for its date.
    ///
    /// Returns the replaced snapshot, if there was one.
    pub fn upsert(
        &self,
        snapshot: NetWorthSnapshot,
    ) -> Result<Option<NetWorthSnapshot>, NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.insert(snapshot.date, snapshot))
    }

    pub fn delete(&self, date: NaiveDate) -> Result<Option<NetWorthSnapshot>, NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&date))
    }
}
