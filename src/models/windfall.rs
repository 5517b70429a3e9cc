//! Windfall model
//!
//! A windfall is a one-off income event with a known date: a bonus, an RSU
//! vest, an ESPP purchase. It is folded into the projection in the month it
//! lands and never repeats.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WindfallId;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindfallType {
    Bonus,
    Rsu,
    Espp,
    #[default]
    Other,
}

impl WindfallType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bonus" => Some(Self::Bonus),
            "rsu" => Some(Self::Rsu),
            "espp" => Some(Self::Espp),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for WindfallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bonus => "Bonus",
            Self::Rsu => "RSU",
            Self::Espp => "ESPP",
            Self::Other => "Other",
        };
        f.pad(label)
    }
}

/// A non-recurring, dated income event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Windfall {
    pub id: WindfallId,
    pub name: String,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub windfall_type: WindfallType,
    pub created_at: DateTime<Utc>,
}

impl Windfall {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        windfall_type: WindfallType,
    ) -> Self {
        Self {
            id: WindfallId::new(),
            name: name.into(),
            amount,
            date,
            windfall_type,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), WindfallValidationError> {
        if self.name.trim().is_empty() {
            return Err(WindfallValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(WindfallValidationError::NegativeAmount);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindfallValidationError {
    EmptyName,
    NegativeAmount,
}

impl fmt::Display for WindfallValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Windfall name cannot be empty"),
            Self::NegativeAmount => write!(f, "Windfall amount cannot be negative"),
        }
    }
}

impl std::error::Error for WindfallValidationError {}
