//! Net-worth goal tracking
//!
//! Answers "when does my projected net worth reach X?" by scanning the
//! end-of-month totals of one or more consecutive year projections.

use chrono::Datelike;
use chrono::NaiveDate;
use serde::Serialize;

use super::dates::year_month;
use super::year::YearProjection;

/// Longest horizon, in calendar years, a goal search may cover
pub const MAX_GOAL_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalEstimate {
    /// Current net worth already meets the target
    AlreadyMet { current_net_worth: f64 },
    /// The first month whose end-of-month total reaches the target
    Reached {
        /// First day of that month, `YYYY-MM-01`
        month: String,
        months_from_now: u32,
        projected_total: f64,
    },
    /// Not reached by the end of the last projection supplied
    NotReached { horizon_end: String, projected_total: f64 },
}

/// Estimate when `target` is reached.
///
/// Months before the one containing `as_of` are ignored, since they describe
/// the past rather than a forecast.
pub fn estimate_goal(
    current_net_worth: f64,
    projections: &[YearProjection],
    target: f64,
    as_of: NaiveDate,
) -> GoalEstimate {
    if current_net_worth >= target {
        return GoalEstimate::AlreadyMet { current_net_worth };
    }

    let now = i64::from(as_of.year()) * 12 + i64::from(as_of.month0());
    let mut last: Option<(&str, f64)> = None;

    for projection in projections {
        for month in &projection.monthly_data {
            let Some((year, month0)) = year_month(&month.date) else {
                continue;
            };
            let index = i64::from(year) * 12 + i64::from(month0);
            if index < now {
                continue;
            }

            if month.new_total >= target {
                return GoalEstimate::Reached {
                    month: month.date.clone(),
                    months_from_now: (index - now) as u32,
                    projected_total: month.new_total,
                };
            }
            last = Some((month.date.as_str(), month.new_total));
        }
    }

    match last {
        Some((date, total)) => GoalEstimate::NotReached {
            horizon_end: date.to_string(),
            projected_total: total,
        },
        None => GoalEstimate::NotReached {
            horizon_end: as_of.format("%Y-%m-%d").to_string(),
            projected_total: current_net_worth,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::inputs::ProjectionInput;
    use crate::projection::year::build_year_projection;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    fn years(first: i32, count: i32, monthly: f64, current: f64) -> Vec<YearProjection> {
        (first..first + count)
            .map(|year| build_year_projection(&ProjectionInput::new(year, monthly, current, as_of())))
            .collect()
    }

    #[test]
    fn test_already_met() {
        let estimate = estimate_goal(5000.0, &years(2024, 1, 100.0, 5000.0), 5000.0, as_of());
        assert_eq!(
            estimate,
            GoalEstimate::AlreadyMet {
                current_net_worth: 5000.0
            }
        );
    }

    #[test]
    fn test_reached_in_future_month() {
        // April start is 10000; April ends at 11000, May at 12000
        let estimate = estimate_goal(10000.0, &years(2024, 1, 1000.0, 10000.0), 11500.0, as_of());
        assert_eq!(
            estimate,
            GoalEstimate::Reached {
                month: "2024-05-01".into(),
                months_from_now: 1,
                projected_total: 12000.0,
            }
        );
    }

    #[test]
    fn test_reached_in_following_year() {
        // December 2024 ends at 19000, January 2025 at 20000
        let estimate = estimate_goal(10000.0, &years(2024, 2, 1000.0, 10000.0), 19500.0, as_of());
        match estimate {
            GoalEstimate::Reached {
                month,
                months_from_now,
                ..
            } => {
                assert_eq!(month, "2025-01-01");
                assert_eq!(months_from_now, 9);
            }
            other => panic!("expected goal to be reached, got {:?}", other),
        }
    }

    #[test]
    fn test_past_months_do_not_count() {
        // A January windfall pushes the past above target, but the present is below
        let mut projections = years(2024, 1, 0.0, 100.0);
        projections[0].monthly_data[0].new_total = 1_000_000.0;

        let estimate = estimate_goal(100.0, &projections, 500.0, as_of());
        assert!(matches!(estimate, GoalEstimate::NotReached { .. }));
    }

    #[test]
    fn test_not_reached_reports_horizon() {
        let estimate = estimate_goal(0.0, &years(2024, 1, 10.0, 0.0), 1_000_000.0, as_of());
        assert_eq!(
            estimate,
            GoalEstimate::NotReached {
                horizon_end: "2024-12-01".into(),
                projected_total: 90.0,
            }
        );
    }
}
