//! Projection CLI commands
//!
//! `project rate|year|rolling` and `goal`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use clap::Subcommand;

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::PayFrequency;
use crate::projection::{monthly_factor, GoalEstimate, MAX_ROLLING_DAYS};
use crate::reports::{format_amount, RollingReport, YearProjectionReport};
use crate::services::{IncomeService, ProjectionService};
use crate::storage::Storage;

use super::parse_amount;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Show the monthly net worth increase from the primary paycheck
    Rate,
    /// Month-by-month projection for a calendar year
    Year {
        /// Calendar year, defaults to the current one
        #[arg(value_parser = clap::value_parser!(i32).range(1..=9999))]
        year: Option<i32>,
        /// Export the monthly table to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export the chart series (13 points) to a CSV file
        #[arg(long)]
        chart: Option<PathBuf>,
    },
    /// Recorded or projected net worth for the trailing window
    Rolling {
        /// Window length in days, defaults to the configured value
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROLLING_DAYS))
        )]
        days: Option<u32>,
    },
}

pub fn handle_project_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ProjectCommands,
) -> NetWorthResult<()> {
    let service = ProjectionService::new(storage, clock);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ProjectCommands::Rate => {
            let rate = service.monthly_increase();
            match IncomeService::new(storage).primary_paycheck()? {
                Some(paycheck) => {
                    println!(
                        "Primary paycheck: {} ({} {})",
                        paycheck.name, paycheck.amount, paycheck.frequency
                    );
                    if !is_converted(paycheck.frequency) {
                        println!(
                            "  note: {} pay is counted {} times per month",
                            paycheck.frequency,
                            monthly_factor(paycheck.frequency)
                        );
                    }
                }
                None => println!("No paycheck income source; the rate is zero."),
            }
            println!("Monthly net worth increase: {}", format_amount(rate, symbol));
        }

        ProjectCommands::Year {
            year,
            output,
            chart,
        } => {
            let year = year.unwrap_or_else(|| clock.today().year());
            let report = YearProjectionReport::generate(&service, year, symbol);

            print!("{}", report.format_terminal());

            if let Some(path) = output {
                report.export_csv(BufWriter::new(create_file(&path)?))?;
                println!("\nExported monthly table to {}", path.display());
            }
            if let Some(path) = chart {
                report.export_chart_csv(BufWriter::new(create_file(&path)?))?;
                println!("Exported chart series to {}", path.display());
            }
        }

        ProjectCommands::Rolling { days } => {
            let days = days.unwrap_or(settings.rolling_window_days);
            print!("{}", RollingReport::generate(&service, days, symbol).format_terminal());
        }
    }

    Ok(())
}

/// Report when projected net worth reaches `target`
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    target: &str,
    years: u32,
) -> NetWorthResult<()> {
    let target = parse_amount(target)?;
    let symbol = settings.currency_symbol.as_str();
    let service = ProjectionService::new(storage, clock);

    match service.goal(target.to_f64(), years) {
        GoalEstimate::AlreadyMet { current_net_worth } => {
            println!(
                "Goal of {} already met: current net worth is {}",
                target.format_with_symbol(symbol),
                format_amount(current_net_worth, symbol)
            );
        }
        GoalEstimate::Reached {
            month,
            months_from_now,
            projected_total,
        } => {
            println!(
                "Goal of {} reached in the month of {} ({} month(s) from now), projected {}",
                target.format_with_symbol(symbol),
                month,
                months_from_now,
                format_amount(projected_total, symbol)
            );
        }
        GoalEstimate::NotReached {
            horizon_end,
            projected_total,
        } => {
            println!(
                "Goal of {} not reached by {}; projected {} at that point",
                target.format_with_symbol(symbol),
                horizon_end,
                format_amount(projected_total, symbol)
            );
        }
    }

    Ok(())
}

fn is_converted(frequency: PayFrequency) -> bool {
    matches!(
        frequency,
        PayFrequency::Weekly
            | PayFrequency::BiWeekly
            | PayFrequency::SemiMonthly
            | PayFrequency::Monthly
    )
}

fn create_file(path: &Path) -> NetWorthResult<File> {
    File::create(path).map_err(|e| {
        NetWorthError::Export(format!("Failed to create {}: {}", path.display(), e))
    })
}
