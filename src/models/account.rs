//! Account model
//!
//! Accounts carry a single current balance. The sum of every account's
//! balance is the user's current net worth; liabilities are stored as
//! negative balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Investment,
    Retirement,
    Cash,
    Credit,
    Loan,
    Other,
}

impl AccountType {
    /// Returns true if this account type normally holds a negative balance
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit | Self::Loan)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "investment" | "brokerage" => Some(Self::Investment),
            "retirement" | "401k" | "ira" => Some(Self::Retirement),
            "cash" => Some(Self::Cash),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "loan" | "mortgage" => Some(Self::Loan),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Investment => "Investment",
            Self::Retirement => "Retirement",
            Self::Cash => "Cash",
            Self::Credit => "Credit Card",
            Self::Loan => "Loan",
            Self::Other => "Other",
        };
        f.pad(label)
    }
}

/// A financial account and its current balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance
    pub balance: Money,

    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Account {
    /// Create a new account with the given balance
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            balance,
            currency: default_currency(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the balance
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AccountValidationError::InvalidCurrency(self.currency.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidCurrency(String),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::InvalidCurrency(code) => {
                write!(f, "Invalid currency code '{}', expected e.g. USD", code)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", AccountType::Checking, Money::from_cents(150000));
        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance.cents(), 150000);
        assert_eq!(account.currency, "USD");
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Savings", AccountType::Savings, Money::zero());
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "Savings".to_string();
        account.currency = "usd".to_string();
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::InvalidCurrency(_))
        ));
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse("401k"), Some(AccountType::Retirement));
        assert_eq!(AccountType::parse("Mortgage"), Some(AccountType::Loan));
        assert_eq!(AccountType::parse("nonsense"), None);
        assert!(AccountType::Credit.is_liability());
        assert!(!AccountType::Savings.is_liability());
    }

    #[test]
    fn test_serialization() {
        let account = Account::new("Brokerage", AccountType::Investment, Money::from_cents(99));
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"type\":\"investment\""));

        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, account.id);
        assert_eq!(back.balance, account.balance);
    }
}
