//! Budget allocation model
//!
//! A budget allocation directs a slice of each payment from one income source
//! somewhere ("20% to savings", "$150 to the brokerage account"). Only slices
//! flagged `increases_net_worth` feed the monthly accrual rate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AllocationId, IncomeSourceId};
use super::money::Money;

/// How an allocation's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationUnit {
    /// Value is a percentage of the paycheck amount
    Percentage,
    /// Value is an absolute currency amount per paycheck
    Fixed,
}

impl fmt::Display for AllocationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => f.pad("percentage"),
            Self::Fixed => f.pad("fixed"),
        }
    }
}

/// A rule for directing part of an income source's payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub id: AllocationId,

    /// The income source this allocation belongs to
    pub income_source_id: IncomeSourceId,

    /// Label (e.g., "Emergency fund")
    pub name: String,

    pub unit: AllocationUnit,

    /// Fixed-point value in hundredths.
    ///
    /// For `Fixed` this is a currency amount in cents. For `Percentage` it is
    /// the percentage times 100 (10.50% is stored as 1050), so both units
    /// convert to their natural value with [`Money::to_f64`].
    pub value: Money,

    /// Whether this slice counts toward net-worth growth (savings, investing)
    /// rather than being spent (rent, groceries)
    pub increases_net_worth: bool,

    pub created_at: DateTime<Utc>,
}

impl BudgetAllocation {
    pub fn new(
        income_source_id: IncomeSourceId,
        name: impl Into<String>,
        unit: AllocationUnit,
        value: Money,
        increases_net_worth: bool,
    ) -> Self {
        Self {
            id: AllocationId::new(),
            income_source_id,
            name: name.into(),
            unit,
            value,
            increases_net_worth,
            created_at: Utc::now(),
        }
    }

    /// Human-readable value ("12.50%" or "$150.00")
    pub fn format_value(&self) -> String {
        match self.unit {
            AllocationUnit::Percentage => format!(
                "{}.{:02}%",
                self.value.dollars(),
                self.value.cents_part()
            ),
            AllocationUnit::Fixed => self.value.to_string(),
        }
    }

    /// Validate the allocation
    pub fn validate(&self) -> Result<(), AllocationValidationError> {
        if self.name.trim().is_empty() {
            return Err(AllocationValidationError::EmptyName);
        }
        if self.value.is_negative() {
            return Err(AllocationValidationError::NegativeValue);
        }
        if self.unit == AllocationUnit::Percentage && self.value > Money::from_dollars(100) {
            return Err(AllocationValidationError::PercentageOutOfRange);
        }
        Ok(())
    }
}

/// Validation errors for budget allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationValidationError {
    EmptyName,
    NegativeValue,
    PercentageOutOfRange,
}

impl fmt::Display for AllocationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Allocation name cannot be empty"),
            Self::NegativeValue => write!(f, "Allocation value cannot be negative"),
            Self::PercentageOutOfRange => {
                write!(f, "Percentage allocations must be between 0 and 100")
            }
        }
    }
}

impl std::error::Error for AllocationValidationError {}
