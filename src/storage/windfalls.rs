//! Windfall repository for JSON storage
//!
//! Manages loading and saving windfalls to windfalls.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NetWorthError;
use crate::models::{Windfall, WindfallId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct WindfallData {
    windfalls: Vec<Windfall>,
}

/// Repository for windfall persistence
pub struct WindfallRepository {
    path: PathBuf,
    data: RwLock<HashMap<WindfallId, Windfall>>,
}

impl WindfallRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load windfalls from disk
    pub fn load(&self) -> Result<(), NetWorthError> {
        let file_data: WindfallData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for windfall in file_data.windfalls {
            data.insert(windfall.id, windfall);
        }

        Ok(())
    }

    /// Save windfalls to disk
    pub fn save(&self) -> Result<(), NetWorthError> {
        let windfalls = self.get_all()?;
        write_json_atomic(&self.path, &WindfallData { windfalls })
    }

    pub fn get(&self, id: WindfallId) -> Result<Option<Windfall>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All windfalls, earliest date first
    pub fn get_all(&self) -> Result<Vec<Windfall>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut windfalls: Vec<_> = data.values().cloned().collect();
        windfalls.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(windfalls)
    }

    /// Find a windfall by name (case-insensitive) or by short ID
    pub fn find(&self, identifier: &str) -> Result<Option<Windfall>, NetWorthError> {
        let data = self.data.read().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name_lower = identifier.to_lowercase();
        Ok(data
            .values()
            .find(|w| w.name.to_lowercase() == name_lower)
            .or_else(|| data.values().find(|w| w.id.matches(identifier)))
            .cloned())
    }

    pub fn upsert(&self, windfall: Windfall) -> Result<(), NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(windfall.id, windfall);
        Ok(())
    }

    pub fn delete(&self, id: WindfallId) -> Result<Option<Windfall>, NetWorthError> {
        let mut data = self.data.write().map_err(|e| {
            NetWorthError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, WindfallType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn windfall(name: &str, month: u32) -> Windfall {
        Windfall::new(
            name,
            Money::from_dollars(1000),
            NaiveDate::from_ymd_opt(2024, month, 15).unwrap(),
            WindfallType::Bonus,
        )
    }

    #[test]
    fn test_save_and_reload_sorted_by_date() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("windfalls.json");
        let repo = WindfallRepository::new(path.clone());
        repo.upsert(windfall("Q4 bonus", 11)).unwrap();
        repo.upsert(windfall("RSU vest", 3)).unwrap();
        repo.save().unwrap();

        let reloaded = WindfallRepository::new(path);
        reloaded.load().unwrap();
        let names: Vec<_> = reloaded.get_all().unwrap().into_iter().map(|w| w.name).collect();
        assert_eq!(names, vec!["RSU vest", "Q4 bonus"]);
    }

    #[test]
    fn test_find_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = WindfallRepository::new(temp_dir.path().join("windfalls.json"));
        let w = windfall("ESPP", 5);
        repo.upsert(w.clone()).unwrap();

        assert_eq!(repo.find("espp").unwrap().unwrap().id, w.id);
        assert!(repo.delete(w.id).unwrap().is_some());
        assert!(repo.find("espp").unwrap().is_none());
    }
}
