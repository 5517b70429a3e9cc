//! Account service
//!
//! Provides business logic for account management: CRUD operations, balance
//! updates and the live net worth total.

use crate::audit::EntityType;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{Account, AccountId, AccountType, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(
        &self,
        name: &str,
        account_type: AccountType,
        balance: Money,
    ) -> NetWorthResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(NetWorthError::Validation(
                "Account name cannot be empty".into(),
            ));
        }

        if self.storage.accounts.name_exists(name, None)? {
            return Err(NetWorthError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::new(name, account_type, balance);
        account
            .validate()
            .map_err(|e| NetWorthError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> NetWorthResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> NetWorthResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        self.storage.accounts.find_by_id(identifier)
    }

    /// Get all accounts
    pub fn list(&self) -> NetWorthResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Replace an account's balance
    pub fn set_balance(&self, id: AccountId, balance: Money) -> NetWorthResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| NetWorthError::account_not_found(id.to_string()))?;

        let before = account.clone();
        account.set_balance(balance);

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
            Some(format!("balance: {} -> {}", before.balance, account.balance)),
        )?;

        Ok(account)
    }

    /// Remove an account
    pub fn remove(&self, id: AccountId) -> NetWorthResult<Account> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| NetWorthError::account_not_found(id.to_string()))?;

        self.storage.accounts.delete(id)?;
        self.storage.accounts.save()?;

        self.storage.log_delete(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    /// Sum of every account balance
    pub fn current_net_worth(&self) -> NetWorthResult<Money> {
        Ok(self
            .storage
            .accounts
            .get_all()?
            .iter()
            .map(|a| a.balance)
            .sum())
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
    fn test_create_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let account = service
            .create("Checking", AccountType::Checking, Money::from_cents(100000))
            .unwrap();

        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance.cents(), 100000);
    }

    #[test]
    fn test_create_duplicate_name_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        service
            .create("Checking", AccountType::Checking, Money::zero())
            .unwrap();
        let result = service.create("checking", AccountType::Savings, Money::zero());

        assert!(matches!(result, Err(NetWorthError::Duplicate { .. })));
    }

    #[test]
    fn test_create_empty_name_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let result = service.create("   ", AccountType::Checking, Money::zero());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let account = service
            .create("Brokerage", AccountType::Investment, Money::zero())
            .unwrap();

        assert!(service.find("brokerage").unwrap().is_some());
        assert!(service.find(&account.id.to_string()).unwrap().is_some());
        assert!(service.find("nope").unwrap().is_none());
    }

    #[test]
    fn test_set_balance_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        let account = service
            .create("Checking", AccountType::Checking, Money::from_dollars(10))
            .unwrap();

        let updated = service
            .set_balance(account.id, Money::from_dollars(25))
            .unwrap();
        assert_eq!(updated.balance, Money::from_dollars(25));

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("balance"));
    }

    #[test]
    fn test_current_net_worth_sums_balances() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);
        service
            .create("Checking", AccountType::Checking, Money::from_cents(150050))
            .unwrap();
        service
            .create("Card", AccountType::Credit, Money::from_cents(-25025))
            .unwrap();

        assert_eq!(service.current_net_worth().unwrap().cents(), 125025);
    }

    #[test]
    fn test_remove_missing_account() {
        let (_temp_dir, storage) = create_test_storage();
        let service = AccountService::new(&storage);

        let err = service.remove(AccountId::new()).unwrap_err();
        assert!(err.is_not_found());
    }
}
