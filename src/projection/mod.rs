//! Net-worth projection engine
//!
//! Pure functions over plain rows. Nothing in this module performs I/O,
//! touches storage, reads the system clock, or returns an error: every
//! function is total over well-typed input and recomputes from scratch on
//! each call.
//!
//! - [`rate`]: monthly accrual rate from a paycheck and its allocations
//! - [`year`]: twelve-month projection for any calendar year
//! - [`rolling`]: recorded-vs-synthetic choice for the trailing chart
//! - [`goal`]: first projected month reaching a target net worth
//! - [`dates`]: `YYYY-MM` bucketing on date strings
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use networth::projection::{build_year_projection, ProjectionInput};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let input = ProjectionInput::new(2024, 500.0, 10_000.0, today);
//! let projection = build_year_projection(&input);
//!
//! assert_eq!(projection.monthly_data.len(), 12);
//! assert_eq!(projection.final_total, 16_000.0);
//! ```

pub mod dates;
pub mod goal;
pub mod inputs;
pub mod rate;
pub mod rolling;
pub mod year;

pub use goal::{estimate_goal, GoalEstimate, MAX_GOAL_YEARS};
pub use inputs::{
    AllocationRow, IncomeRow, ProjectionInput, SnapshotRow, TransactionRow, WindfallRow,
};
pub use rate::{compute_monthly_accrual_rate, monthly_factor};
pub use rolling::{
    reconcile_rolling_history, RollingHistory, SeriesSource, DEFAULT_ROLLING_DAYS,
    MAX_ROLLING_DAYS,
};
pub use year::{build_year_projection, MonthlyProjection, StartAnchor, YearProjection};
