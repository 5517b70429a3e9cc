//! Plain input rows consumed by the projection engine
//!
//! Amounts are `f64` and dates are ISO `YYYY-MM-DD` strings. Persisted
//! entities are converted into these rows by the service layer before any
//! projection runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AllocationUnit, PayFrequency, TransactionKind};

/// The paycheck that drives the accrual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub amount: f64,
    pub frequency: PayFrequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    pub unit: AllocationUnit,
    /// Percentage points for `Percentage`, currency amount for `Fixed`
    pub value: f64,
    pub increases_net_worth: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindfallRow {
    pub name: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Non-negative; direction comes from `kind`
    pub amount: f64,
    pub date: String,
    pub kind: TransactionKind,
}

/// A dated net-worth value: a recorded snapshot, or a point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub date: String,
    pub net_worth: f64,
}

impl SnapshotRow {
    pub fn new(date: impl Into<String>, net_worth: f64) -> Self {
        Self {
            date: date.into(),
            net_worth,
        }
    }
}

/// Everything a year projection needs, gathered once per request
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInput {
    pub selected_year: i32,
    pub monthly_increase: f64,
    /// Live sum of today's account balances
    pub current_net_worth: f64,
    /// Snapshots from any year; searched for a January anchor
    pub net_worth_history: Vec<SnapshotRow>,
    /// Windfalls from any date
    pub windfalls: Vec<WindfallRow>,
    /// Ledger entries for the selected year
    pub transactions: Vec<TransactionRow>,
    /// "Today", used to extrapolate to January 1 when no anchor exists
    pub as_of: NaiveDate,
}

impl ProjectionInput {
    /// Input with no history, windfalls or transactions
    pub fn new(
        selected_year: i32,
        monthly_increase: f64,
        current_net_worth: f64,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            selected_year,
            monthly_increase,
            current_net_worth,
            net_worth_history: Vec::new(),
            windfalls: Vec::new(),
            transactions: Vec::new(),
            as_of,
        }
    }

    pub fn with_history(mut self, history: Vec<SnapshotRow>) -> Self {
        self.net_worth_history = history;
        self
    }

    pub fn with_windfalls(mut self, windfalls: Vec<WindfallRow>) -> Self {
        self.windfalls = windfalls;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<TransactionRow>) -> Self {
        self.transactions = transactions;
        self
    }
}
