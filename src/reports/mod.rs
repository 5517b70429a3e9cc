//! Reports module for the net-worth tracker
//!
//! Renders projection results for the terminal and exports them as CSV.

pub mod projection;
pub mod rolling;

pub use projection::YearProjectionReport;
pub use rolling::RollingReport;

use crate::models::Money;

/// Format an engine amount as currency, rounded to the cent
pub fn format_amount(value: f64, symbol: &str) -> String {
    Money::from_f64(value).format_with_symbol(symbol)
}
