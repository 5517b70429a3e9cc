//! Income repository
//!
//! Income sources and the budget allocations that split each payment are
//! stored together in income.json. Allocations are owned by their source:
//! deleting a source removes its allocations in the same operation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::NetWorthError;
use crate::models::{AllocationId, BudgetAllocation, IncomeSource, IncomeSourceId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    sources: Vec<IncomeSource>,
    #[serde(default)]
    allocations: Vec<BudgetAllocation>,
}

/// Repository for income sources and budget allocations
pub struct IncomeRepository {
    path: PathBuf,
    sources: RwLock<HashMap<IncomeSourceId, IncomeSource>>,
    allocations: RwLock<HashMap<AllocationId, BudgetAllocation>>,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sources: RwLock::new(HashMap::new()),
            allocations: RwLock::new(HashMap::new()),
        }
    }

    /// Load sources and allocations from disk
    pub fn load(&self) -> Result<(), NetWorthError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut sources = self
            .sources
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.clear();
        allocations.clear();

        for source in file_data.sources {
            sources.insert(source.id, source);
        }
        for allocation in file_data.allocations {
            allocations.insert(allocation.id, allocation);
        }

        Ok(())
    }

    /// Save sources and allocations to disk
    pub fn save(&self) -> Result<(), NetWorthError> {
        let file_data = IncomeData {
            sources: self.get_all_sources()?,
            allocations: self.get_all_allocations()?,
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn get_source(&self, id: IncomeSourceId) -> Result<Option<IncomeSource>, NetWorthError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(sources.get(&id).cloned())
    }

    /// All income sources, oldest first
    pub fn get_all_sources(&self) -> Result<Vec<IncomeSource>, NetWorthError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = sources.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Find a source by name (case-insensitive) or by short ID
    pub fn find_source(&self, identifier: &str) -> Result<Option<IncomeSource>, NetWorthError> {
        let sources = self
            .sources
            .read()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = identifier.to_lowercase();
        Ok(sources
            .values()
            .find(|s| s.name.to_lowercase() == name_lower)
            .or_else(|| sources.values().find(|s| s.id.matches(identifier)))
            .cloned())
    }

    pub fn upsert_source(&self, source: IncomeSource) -> Result<(), NetWorthError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        sources.insert(source.id, source);
        Ok(())
    }

    /// Delete a source and every allocation attached to it.
    ///
    /// Returns the removed source together with the removed allocations.
    pub fn delete_source(
        &self,
        id: IncomeSourceId,
    ) -> Result<Option<(IncomeSource, Vec<BudgetAllocation>)>, NetWorthError> {
        let mut sources = self
            .sources
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let Some(source) = sources.remove(&id) else {
            return Ok(None);
        };

        let owned: Vec<AllocationId> = allocations
            .values()
            .filter(|a| a.income_source_id == id)
            .map(|a| a.id)
            .collect();

        let mut removed: Vec<_> = owned
            .iter()
            .filter_map(|alloc_id| allocations.remove(alloc_id))
            .collect();
        removed.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(Some((source, removed)))
    }

    /// All allocations, oldest first
    pub fn get_all_allocations(&self) -> Result<Vec<BudgetAllocation>, NetWorthError> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = allocations.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Allocations belonging to one income source, oldest first
    pub fn get_allocations_for_source(
        &self,
        source_id: IncomeSourceId,
    ) -> Result<Vec<BudgetAllocation>, NetWorthError> {
        Ok(self
            .get_all_allocations()?
            .into_iter()
            .filter(|a| a.income_source_id == source_id)
            .collect())
    }

    /// Find an allocation by short ID
    pub fn find_allocation(
        &self,
        identifier: &str,
    ) -> Result<Option<BudgetAllocation>, NetWorthError> {
        let allocations = self
            .allocations
            .read()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(allocations
            .values()
            .find(|a| a.id.matches(identifier))
            .cloned())
    }

    pub fn upsert_allocation(&self, allocation: BudgetAllocation) -> Result<(), NetWorthError> {
        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        allocations.insert(allocation.id, allocation);
        Ok(())
    }

    pub fn delete_allocation(
        &self,
        id: AllocationId,
    ) -> Result<Option<BudgetAllocation>, NetWorthError> {
        let mut allocations = self
            .allocations
            .write()
            .map_err(|e| NetWorthError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(allocations.remove(&id))
    }
}
