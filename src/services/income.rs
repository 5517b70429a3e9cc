//! Income service
//!
//! Manages income sources and the budget allocations that split each
//! payment. Removing a source also removes its allocations, and every
//! removed allocation gets its own audit entry.

use crate::audit::EntityType;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{
    AllocationId, AllocationUnit, BudgetAllocation, IncomeSource, IncomeSourceId, IncomeType,
    Money, PayFrequency,
};
use crate::storage::Storage;

/// Service for income source and allocation management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an income source
    pub fn add_source(
        &self,
        name: &str,
        amount: Money,
        frequency: PayFrequency,
        income_type: IncomeType,
    ) -> NetWorthResult<IncomeSource> {
        let source = IncomeSource::new(name.trim(), amount, frequency, income_type);
        source
            .validate()
            .map_err(|e| NetWorthError::Validation(e.to_string()))?;

        self.storage.income.upsert_source(source.clone())?;
        self.storage.income.save()?;

        self.storage.log_create(
            EntityType::IncomeSource,
            source.id.to_string(),
            Some(source.name.clone()),
            &source,
        )?;

        Ok(source)
    }

    /// All income sources, oldest first
    pub fn list_sources(&self) -> NetWorthResult<Vec<IncomeSource>> {
        self.storage.income.get_all_sources()
    }

    /// Find a source by name or ID string
    pub fn find_source(&self, identifier: &str) -> NetWorthResult<Option<IncomeSource>> {
        self.storage.income.find_source(identifier)
    }

    /// The source that drives the accrual rate: the oldest paycheck-type one
    pub fn primary_paycheck(&self) -> NetWorthResult<Option<IncomeSource>> {
        Ok(self
            .list_sources()?
            .into_iter()
            .find(IncomeSource::is_paycheck))
    }

    /// Remove a source together with its allocations
    pub fn remove_source(
        &self,
        id: IncomeSourceId,
    ) -> NetWorthResult<(IncomeSource, Vec<BudgetAllocation>)> {
        let (source, allocations) = self
            .storage
            .income
            .delete_source(id)?
            .ok_or_else(|| NetWorthError::income_source_not_found(id.to_string()))?;

        self.storage.income.save()?;

        for allocation in &allocations {
            self.storage.log_delete(
                EntityType::BudgetAllocation,
                allocation.id.to_string(),
                Some(allocation.name.clone()),
                allocation,
            )?;
        }
        self.storage.log_delete(
            EntityType::IncomeSource,
            source.id.to_string(),
            Some(source.name.clone()),
            &source,
        )?;

        Ok((source, allocations))
    }

    /// Add an allocation to an existing source.
    ///
    /// Percentage values are hundredths of a percent, so `Money::from_cents(1050)`
    /// means 10.50%.
    pub fn add_allocation(
        &self,
        source_id: IncomeSourceId,
        name: &str,
        unit: AllocationUnit,
        value: Money,
        increases_net_worth: bool,
    ) -> NetWorthResult<BudgetAllocation> {
        if self.storage.income.get_source(source_id)?.is_none() {
            return Err(NetWorthError::income_source_not_found(source_id.to_string()));
        }

        let allocation =
            BudgetAllocation::new(source_id, name.trim(), unit, value, increases_net_worth);
        allocation
            .validate()
            .map_err(|e| NetWorthError::Validation(e.to_string()))?;

        self.storage.income.upsert_allocation(allocation.clone())?;
        self.storage.income.save()?;

        self.storage.log_create(
            EntityType::BudgetAllocation,
            allocation.id.to_string(),
            Some(allocation.name.clone()),
            &allocation,
        )?;

        Ok(allocation)
    }

    /// Allocations for one source, or for every source when `None`
    pub fn list_allocations(
        &self,
        source_id: Option<IncomeSourceId>,
    ) -> NetWorthResult<Vec<BudgetAllocation>> {
        match source_id {
            Some(id) => self.storage.income.get_allocations_for_source(id),
            None => self.storage.income.get_all_allocations(),
        }
    }

    pub fn find_allocation(&self, identifier: &str) -> NetWorthResult<Option<BudgetAllocation>> {
        self.storage.income.find_allocation(identifier)
    }

    pub fn remove_allocation(&self, id: AllocationId) -> NetWorthResult<BudgetAllocation> {
        let allocation = self
            .storage
            .income
            .delete_allocation(id)?
            .ok_or_else(|| NetWorthError::allocation_not_found(id.to_string()))?;

        self.storage.income.save()?;

        self.storage.log_delete(
            EntityType::BudgetAllocation,
            allocation.id.to_string(),
            Some(allocation.name.clone()),
            &allocation,
        )?;

        Ok(allocation)
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

    fn add_paycheck(service: &IncomeService) -> IncomeSource {
        service
            .add_source(
                "Payroll",
                Money::from_dollars(2000),
                PayFrequency::BiWeekly,
                IncomeType::Paycheck,
            )
            .unwrap()
    }

    #[test]
    fn test_primary_paycheck_skips_other_types() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .add_source(
                "Consulting",
                Money::from_dollars(500),
                PayFrequency::Monthly,
                IncomeType::Freelance,
            )
            .unwrap();
        assert!(service.primary_paycheck().unwrap().is_none());

        let paycheck = add_paycheck(&service);
        assert_eq!(service.primary_paycheck().unwrap().unwrap().id, paycheck.id);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let result = service.add_source(
            "Payroll",
            Money::from_cents(-1),
            PayFrequency::Monthly,
            IncomeType::Paycheck,
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_allocation_requires_existing_source() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let result = service.add_allocation(
            IncomeSourceId::new(),
            "401k",
            AllocationUnit::Fixed,
            Money::from_dollars(100),
            true,
        );
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_percentage_over_100_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let source = add_paycheck(&service);

        let result = service.add_allocation(
            source.id,
            "Everything",
            AllocationUnit::Percentage,
            Money::from_cents(10001),
            true,
        );
        assert!(result.unwrap_err().is_validation());

        service
            .add_allocation(
                source.id,
                "Everything",
                AllocationUnit::Percentage,
                Money::from_dollars(100),
                true,
            )
            .unwrap();
    }

    #[test]
    fn test_remove_source_cascades_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let source = add_paycheck(&service);
        service
            .add_allocation(
                source.id,
                "401k",
                AllocationUnit::Percentage,
                Money::from_cents(1000),
                true,
            )
            .unwrap();
        service
            .add_allocation(
                source.id,
                "Rent",
                AllocationUnit::Fixed,
                Money::from_dollars(900),
                false,
            )
            .unwrap();

        let (_, removed) = service.remove_source(source.id).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(service.list_allocations(None).unwrap().is_empty());

        // 1 source + 2 allocations created, 2 allocations + 1 source deleted
        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_remove_allocation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);
        let source = add_paycheck(&service);
        let allocation = service
            .add_allocation(
                source.id,
                "Brokerage",
                AllocationUnit::Fixed,
                Money::from_dollars(150),
                true,
            )
            .unwrap();

        service.remove_allocation(allocation.id).unwrap();
        assert!(service
            .list_allocations(Some(source.id))
            .unwrap()
            .is_empty());
        assert!(service
            .remove_allocation(allocation.id)
            .unwrap_err()
            .is_not_found());
    }
}
