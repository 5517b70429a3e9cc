//! Year Projection Report
//!
//! Month-by-month table of a calendar-year projection, its chart series,
//! and a CSV export of both.

use std::io::Write;

use crate::error::NetWorthResult;
use crate::projection::{SnapshotRow, StartAnchor, YearProjection};
use crate::services::ProjectionService;

use super::format_amount;

/// Year Projection Report
#[derive(Debug, Clone)]
pub struct YearProjectionReport {
    pub projection: YearProjection,
    /// Accrual rate the projection was built with
    pub monthly_increase: f64,
    pub currency_symbol: String,
}

impl YearProjectionReport {
    /// Generate the report for `year`
    pub fn generate(service: &ProjectionService, year: i32, currency_symbol: &str) -> Self {
        let projection = service.year_projection(year);
        Self::from_projection(projection, service.monthly_increase(), currency_symbol)
    }

    /// Wrap an already-built projection
    pub fn from_projection(
        projection: YearProjection,
        monthly_increase: f64,
        currency_symbol: &str,
    ) -> Self {
        Self {
            projection,
            monthly_increase,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Line-chart series: twelve month starts plus January 1 of the next year
    pub fn chart_series(&self) -> Vec<SnapshotRow> {
        self.projection.chart_series()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "Net Worth Projection {}\n",
            self.projection.selected_year
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        let anchor = match &self.projection.anchor {
            StartAnchor::Snapshot { date } => format!("snapshot of {}", date),
            StartAnchor::Extrapolated { months_from_now } => {
                format!("extrapolated {:+} months from today", months_from_now)
            }
        };
        output.push_str(&format!(
            "Start of year:  {:>15}  ({})\n",
            format_amount(self.projection.start_of_year, symbol),
            anchor
        ));
        output.push_str(&format!(
            "Monthly rate:   {:>15}\n",
            format_amount(self.monthly_increase, symbol)
        ));
        output.push('\n');

        output.push_str(&format!(
            "{:<6} {:>15} {:>13} {:>13} {:>15}\n",
            "Month", "Start", "Change", "Windfalls", "End"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for month in &self.projection.monthly_data {
            output.push_str(&format!(
                "{:<6} {:>15} {:>13} {:>13} {:>15}\n",
                month.label,
                format_amount(month.start_total, symbol),
                format_amount(month.change, symbol),
                format_amount(month.windfalls, symbol),
                format_amount(month.new_total, symbol),
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total windfalls: {:>15}\n",
            format_amount(self.projection.total_windfalls(), symbol)
        ));
        output.push_str(&format!(
            "Change for year: {:>15}\n",
            format_amount(self.projection.total_change(), symbol)
        ));
        output.push_str(&format!(
            "Final total:     {:>15}\n",
            format_amount(self.projection.final_total, symbol)
        ));

        output
    }

    /// Export the monthly table as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> NetWorthResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["Month", "Date", "Start", "Change", "Windfalls", "End"])?;
        for month in &self.projection.monthly_data {
            wtr.write_record([
                month.label.to_string(),
                month.date.clone(),
                format!("{:.2}", month.start_total),
                format!("{:.2}", month.change),
                format!("{:.2}", month.windfalls),
                format!("{:.2}", month.new_total),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Export the chart series as `date,net_worth` CSV
    pub fn export_chart_csv<W: Write>(&self, writer: W) -> NetWorthResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["date", "net_worth"])?;
        for point in self.chart_series() {
            wtr.write_record([point.date, format!("{:.2}", point.net_worth)])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
