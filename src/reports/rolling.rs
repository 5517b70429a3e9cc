//! Rolling window report

use crate::projection::{RollingHistory, SeriesSource};
use crate::services::ProjectionService;

use super::format_amount;

#[derive(Debug, Clone)]
pub struct RollingReport {
    pub days: u32,
    pub history: RollingHistory,
    pub currency_symbol: String,
}

impl RollingReport {
    pub fn generate(service: &ProjectionService, days: u32, currency_symbol: &str) -> Self {
        Self {
            days,
            history: service.rolling_history(days),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Net Worth, last {} days\n", self.days));
        output.push_str(&"=".repeat(40));
        output.push('\n');

        match self.history.source {
            SeriesSource::Recorded => output.push_str(&format!(
                "Recorded history ({} snapshots)\n",
                self.history.points.len()
            )),
            SeriesSource::Projected => output.push_str(
                "Projected: not enough recorded snapshots for this window\n",
            ),
        }
        output.push('\n');

        for point in &self.history.points {
            output.push_str(&format!(
                "{:<12} {:>18}\n",
                point.date,
                format_amount(point.net_worth, &self.currency_symbol)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::reconcile_rolling_history;
    use chrono::NaiveDate;

    #[test]
    fn test_projected_marker() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let report = RollingReport {
            days: 3,
            history: reconcile_rolling_history(100.0, 30.0, &[], 3, today),
            currency_symbol: "$".into(),
        };

        let output = report.format_terminal();
        assert!(output.contains("Projected"));
        assert!(output.contains("2024-03-03"));
        assert!(output.contains("$102.00"));
    }
}
