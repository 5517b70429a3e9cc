//! Rolling-window history reconciliation
//!
//! The short trailing chart (30 days by default) shows recorded snapshots
//! when there are enough of them, and otherwise a straight-line projection
//! from today's net worth. This is a separate, simpler policy than the
//! calendar-year projection.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::inputs::SnapshotRow;

/// Default length of the rolling window, in days
pub const DEFAULT_ROLLING_DAYS: u32 = 30;

/// Longest window the CLI and settings accept
pub const MAX_ROLLING_DAYS: u32 = 3650;

/// Days in the naive month used to turn a monthly rate into a daily one
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesSource {
    /// Recorded snapshots, returned unchanged
    Recorded,
    /// Synthetic daily points along the accrual rate
    Projected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingHistory {
    pub source: SeriesSource,
    pub points: Vec<SnapshotRow>,
}

/// True when at least half of the window has recorded data
pub fn has_enough_history(recorded: usize, days: usize) -> bool {
    recorded as f64 >= days as f64 / 2.0
}

/// Choose between recorded history and a synthetic projection.
///
/// `historical` must already be limited to the last `days` days. With at
/// least `days / 2` entries it is returned as-is; otherwise `days` points are
/// generated starting at `today`, the `i`-th valued at
/// `current_net_worth + i * (monthly_increase / 30)`. The synthetic series
/// ends early if it would run past the last representable date.
pub fn reconcile_rolling_history(
    current_net_worth: f64,
    monthly_increase: f64,
    historical: &[SnapshotRow],
    days: usize,
    today: NaiveDate,
) -> RollingHistory {
    if has_enough_history(historical.len(), days) {
        return RollingHistory {
            source: SeriesSource::Recorded,
            points: historical.to_vec(),
        };
    }

    let daily_increase = monthly_increase / DAYS_PER_MONTH;
    let points = (0..days)
        .map_while(|i| {
            let date = today.checked_add_signed(Duration::days(i64::try_from(i).ok()?))?;
            Some(SnapshotRow::new(
                date.format("%Y-%m-%d").to_string(),
                current_net_worth + i as f64 * daily_increase,
            ))
        })
        .collect();

    RollingHistory {
        source: SeriesSource::Projected,
        points,
    }
}
