//! Year projection
//!
//! Walks a selected calendar year month by month from a start-of-year net
//! worth, adding the accrual rate, windfalls and recorded transactions that
//! fall in each month.

use chrono::Datelike;
use serde::Serialize;

use super::dates::{first_of_month, in_month, month_label, year_month};
use super::inputs::{ProjectionInput, SnapshotRow};
use crate::models::TransactionKind;

/// One month of a year projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProjection {
    /// Three-letter month name
    pub label: &'static str,
    /// Net change over the month
    pub change: f64,
    /// Windfall income landing in the month
    pub windfalls: f64,
    /// Net worth at the end of the month
    pub new_total: f64,
    /// Net worth at the start of the month
    pub start_total: f64,
    /// First day of the month, `YYYY-MM-01`
    pub date: String,
}

/// Where the January starting value came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartAnchor {
    /// A recorded January snapshot for the selected year
    Snapshot { date: String },
    /// Current net worth moved by the accrual rate across this many months
    /// (negative when January 1 is in the past)
    Extrapolated { months_from_now: i64 },
}

/// Twelve monthly projections for one calendar year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearProjection {
    pub selected_year: i32,
    pub start_of_year: f64,
    pub anchor: StartAnchor,
    pub monthly_data: Vec<MonthlyProjection>,
    /// Projected net worth at the end of December
    pub final_total: f64,
}

impl YearProjection {
    /// Series for a line chart.
    ///
    /// Each month is plotted at its start-of-month value, followed by one
    /// trailing point on January 1 of the next year carrying the final total.
    pub fn chart_series(&self) -> Vec<SnapshotRow> {
        let mut series: Vec<SnapshotRow> = self
            .monthly_data
            .iter()
            .map(|month| SnapshotRow::new(month.date.clone(), month.start_total))
            .collect();

        series.push(SnapshotRow::new(
            first_of_month(i64::from(self.selected_year) + 1, 0),
            self.final_total,
        ));

        series
    }

    /// Sum of every month's windfalls
    pub fn total_windfalls(&self) -> f64 {
        self.monthly_data
            .iter()
            .fold(0.0, |sum, month| sum + month.windfalls)
    }

    /// Net change across the whole year
    pub fn total_change(&self) -> f64 {
        self.final_total - self.start_of_year
    }
}

/// Signed month distance from the current month to January of the
/// selected year: `(selected_year - current_year) * 12 - current_month0`.
///
/// Computed in `i64` so every `i32` year is representable.
pub fn months_to_start_of_year(input: &ProjectionInput) -> i64 {
    let years = i64::from(input.selected_year) - i64::from(input.as_of.year());
    years * 12 - i64::from(input.as_of.month0())
}

/// Net worth on January 1 of the selected year.
///
/// A snapshot dated in January of the selected year wins (the first one in
/// history order). Otherwise current net worth is extrapolated along the
/// accrual rate, backward or forward.
pub fn start_of_year_net_worth(input: &ProjectionInput) -> (f64, StartAnchor) {
    let anchor = input
        .net_worth_history
        .iter()
        .find(|entry| in_month(&entry.date, input.selected_year, 0));

    if let Some(entry) = anchor {
        return (
            entry.net_worth,
            StartAnchor::Snapshot {
                date: entry.date.clone(),
            },
        );
    }

    let months = months_to_start_of_year(input);
    let start = input.current_net_worth + months as f64 * input.monthly_increase;

    (
        start,
        StartAnchor::Extrapolated {
            months_from_now: months,
        },
    )
}

/// Build the twelve-month projection for `input.selected_year`
pub fn build_year_projection(input: &ProjectionInput) -> YearProjection {
    let year = input.selected_year;
    let (start_of_year, anchor) = start_of_year_net_worth(input);

    warn_malformed_dates(input);

    let mut running_total = start_of_year;
    let mut monthly_data = Vec::with_capacity(12);

    for month0 in 0..12u32 {
        let start_total = running_total;

        let windfall_total = input
            .windfalls
            .iter()
            .filter(|w| in_month(&w.date, year, month0))
            .fold(0.0, |sum, w| sum + w.amount);

        let (income_total, expense_total) = input
            .transactions
            .iter()
            .filter(|t| in_month(&t.date, year, month0))
            .fold((0.0, 0.0), |(income, expense), t| match t.kind {
                TransactionKind::Income => (income + t.amount, expense),
                TransactionKind::Expense => (income, expense + t.amount),
            });

        let change = input.monthly_increase + windfall_total + income_total - expense_total;
        let new_total = start_total + change;

        monthly_data.push(MonthlyProjection {
            label: month_label(month0),
            change,
            windfalls: windfall_total,
            new_total,
            start_total,
            date: first_of_month(year.into(), month0),
        });

        running_total = new_total;
    }

    YearProjection {
        selected_year: year,
        start_of_year,
        anchor,
        monthly_data,
        final_total: running_total,
    }
}

/// Rows whose date has no readable `YYYY-MM` prefix never match a month.
/// Say so in the log instead of dropping them silently.
fn warn_malformed_dates(input: &ProjectionInput) {
    let malformed = input
        .windfalls
        .iter()
        .map(|w| w.date.as_str())
        .chain(input.transactions.iter().map(|t| t.date.as_str()))
        .chain(input.net_worth_history.iter().map(|s| s.date.as_str()))
        .filter(|date| year_month(date).is_none());

    for date in malformed {
        tracing::warn!(date, "ignoring projection row with unreadable date");
    }
}
