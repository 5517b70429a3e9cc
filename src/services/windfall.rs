//! Windfall service

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{Money, Windfall, WindfallId, WindfallType};
use crate::storage::Storage;

pub struct WindfallService<'a> {
    storage: &'a Storage,
}

impl<'a> WindfallService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(
        &self,
        name: &str,
        amount: Money,
        date: NaiveDate,
        windfall_type: WindfallType,
    ) -> NetWorthResult<Windfall> {
        let windfall = Windfall::new(name.trim(), amount, date, windfall_type);
        windfall
            .validate()
            .map_err(|e| NetWorthError::Validation(e.to_string()))?;

        self.storage.windfalls.upsert(windfall.clone())?;
        self.storage.windfalls.save()?;

        self.storage.log_create(
            EntityType::Windfall,
            windfall.id.to_string(),
            Some(windfall.name.clone()),
            &windfall,
        )?;

        Ok(windfall)
    }

    /// All windfalls, earliest first
    pub fn list(&self) -> NetWorthResult<Vec<Windfall>> {
        self.storage.windfalls.get_all()
    }

    pub fn find(&self, identifier: &str) -> NetWorthResult<Option<Windfall>> {
        self.storage.windfalls.find(identifier)
    }

    pub fn remove(&self, id: WindfallId) -> NetWorthResult<Windfall> {
        let windfall = self
            .storage
            .windfalls
            .delete(id)?
            .ok_or_else(|| NetWorthError::windfall_not_found(id.to_string()))?;

        self.storage.windfalls.save()?;

        self.storage.log_delete(
            EntityType::Windfall,
            windfall.id.to_string(),
            Some(windfall.name.clone()),
            &windfall,
        )?;

        Ok(windfall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NetWorthPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NetWorthPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_list_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = WindfallService::new(&storage);
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let windfall = service
            .add("Annual bonus", Money::from_dollars(5000), date, WindfallType::Bonus)
            .unwrap();
        assert_eq!(service.list().unwrap().len(), 1);

        service.remove(windfall.id).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(service.remove(windfall.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = WindfallService::new(&storage);
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();

        let result = service.add(" ", Money::from_dollars(1), date, WindfallType::Other);
        assert!(result.unwrap_err().is_validation());
    }
}
