//! Monthly accrual rate
//!
//! Turns one paycheck and its budget allocations into the expected monthly
//! increase in net worth.

use crate::models::{AllocationUnit, PayFrequency};

use super::inputs::{AllocationRow, IncomeRow};

/// Factor applied to frequencies without an explicit monthly conversion.
///
/// NOTE: quarterly, annual and one-time paychecks all land here and are
/// doubled, where a calendar conversion would give roughly 0.33 and 0.083.
/// TODO: replace with calendar factors once the product owner signs off on
/// the change to existing projections.
pub const FALLBACK_MONTHLY_FACTOR: f64 = 2.0;

/// Paychecks per month for a pay frequency
pub fn monthly_factor(frequency: PayFrequency) -> f64 {
    match frequency {
        PayFrequency::Weekly => 4.33,
        PayFrequency::BiWeekly => 2.17,
        PayFrequency::SemiMonthly => 2.0,
        PayFrequency::Monthly => 1.0,
        PayFrequency::Quarterly | PayFrequency::Annually | PayFrequency::OneTime => {
            FALLBACK_MONTHLY_FACTOR
        }
    }
}

/// What one allocation adds to net worth per paycheck
pub fn allocation_contribution(paycheck_amount: f64, allocation: &AllocationRow) -> f64 {
    if !allocation.increases_net_worth {
        return 0.0;
    }
    match allocation.unit {
        AllocationUnit::Percentage => paycheck_amount * allocation.value / 100.0,
        AllocationUnit::Fixed => allocation.value,
    }
}

/// Total net-worth increase per paycheck
pub fn per_paycheck_increase(paycheck_amount: f64, allocations: &[AllocationRow]) -> f64 {
    allocations
        .iter()
        .filter(|a| a.increases_net_worth)
        .fold(0.0, |sum, a| sum + allocation_contribution(paycheck_amount, a))
}

/// Expected monthly increase in net worth.
///
/// Returns exactly `0.0` when the user has no paycheck-type income source.
pub fn compute_monthly_accrual_rate(
    paycheck: Option<&IncomeRow>,
    allocations: &[AllocationRow],
) -> f64 {
    let Some(paycheck) = paycheck else {
        return 0.0;
    };

    per_paycheck_increase(paycheck.amount, allocations) * monthly_factor(paycheck.frequency)
}
