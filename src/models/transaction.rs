//! Transaction model
//!
//! Ledger entries are recorded with a non-negative amount; whether money came
//! in or went out is carried by [`TransactionKind`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("income"),
            Self::Expense => f.pad("expense"),
        }
    }
}

/// A historical ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,

    /// Always non-negative
    pub amount: Money,

    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            name: name.into(),
            amount,
            date,
            kind,
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach tags, normalized to trimmed lowercase without duplicates
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            let tag = tag.as_ref().trim().to_lowercase();
            if !tag.is_empty() && !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// Amount with the sign applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Transaction name cannot be empty"),
            Self::NegativeAmount => write!(
                f,
                "Transaction amount cannot be negative; use the expense type instead"
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let expense = Transaction::new("Rent", Money::from_dollars(300), date(), TransactionKind::Expense);
        assert_eq!(expense.signed_amount().cents(), -30000);

        let income = Transaction::new("Refund", Money::from_dollars(20), date(), TransactionKind::Income);
        assert_eq!(income.signed_amount().cents(), 2000);
    }

    #[test]
    fn test_tags_are_normalized() {
        let txn = Transaction::new("Dinner", Money::from_dollars(40), date(), TransactionKind::Expense)
            .with_tags([" Food ", "food", "", "Social"]);
        assert_eq!(txn.tags, vec!["food".to_string(), "social".to_string()]);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txn = Transaction::new("Oops", Money::from_cents(-1), date(), TransactionKind::Income);
        assert_eq!(txn.validate(), Err(TransactionValidationError::NegativeAmount));
    }
}
