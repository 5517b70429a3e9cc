//! Income source model
//!
//! An income source is one recurring stream of money (a paycheck, rent from
//! a property, freelance invoices). Budget allocations hang off a source and
//! describe how each payment is split up.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeSourceId;
use super::money::Money;

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    SemiMonthly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
    OneTime,
}

impl PayFrequency {
    /// Parse a frequency from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "weekly" => Some(Self::Weekly),
            "bi-weekly" | "biweekly" | "fortnightly" => Some(Self::BiWeekly),
            "semi-monthly" | "semimonthly" => Some(Self::SemiMonthly),
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "annually" | "annual" | "yearly" => Some(Self::Annually),
            "one-time" | "onetime" | "once" => Some(Self::OneTime),
            _ => None,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::SemiMonthly => "semi-monthly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::OneTime => "one-time",
        };
        f.pad(label)
    }
}

/// What kind of income a source represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    /// Salary or wages; the first paycheck source drives the accrual rate
    #[default]
    Paycheck,
    Freelance,
    Rental,
    Investment,
    Other,
}

impl IncomeType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paycheck" | "salary" | "wages" => Some(Self::Paycheck),
            "freelance" | "contract" => Some(Self::Freelance),
            "rental" | "rent" => Some(Self::Rental),
            "investment" | "dividends" => Some(Self::Investment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paycheck => "Paycheck",
            Self::Freelance => "Freelance",
            Self::Rental => "Rental",
            Self::Investment => "Investment",
            Self::Other => "Other",
        };
        f.pad(label)
    }
}

/// A recurring income stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub name: String,

    /// Amount of a single payment
    pub amount: Money,

    pub frequency: PayFrequency,

    #[serde(rename = "type")]
    pub income_type: IncomeType,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IncomeSource {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        frequency: PayFrequency,
        income_type: IncomeType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeSourceId::new(),
            name: name.into(),
            amount,
            frequency,
            income_type,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_paycheck(&self) -> bool {
        self.income_type == IncomeType::Paycheck
    }

    /// Validate the income source
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income source name cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}
