//! Income and allocation CLI commands
//!
//! Income sources describe recurring payments; allocations split each
//! payment of one source.

use clap::Subcommand;

use crate::display::{format_allocation_list, format_income_list};
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{AllocationUnit, IncomeSource, IncomeType, PayFrequency};
use crate::services::IncomeService;
use crate::storage::Storage;

use super::parse_amount;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income source
    Add {
        /// Source name (e.g., "Payroll")
        name: String,
        /// Amount of a single payment
        amount: String,
        /// Pay frequency (weekly, bi-weekly, semi-monthly, monthly, quarterly, annually, one-time)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Income type (paycheck, freelance, rental, investment, other)
        #[arg(short = 't', long = "type", default_value = "paycheck")]
        income_type: String,
    },
    /// List income sources and their allocations
    List,
    /// Remove an income source and all of its allocations
    Remove {
        /// Source name or ID
        source: String,
    },
}

/// Allocation subcommands
#[derive(Subcommand)]
pub enum AllocationCommands {
    /// Add an allocation to an income source
    Add {
        /// Income source name or ID
        source: String,
        /// Allocation name (e.g., "401k")
        name: String,
        /// Percentage of the payment (e.g., "10" or "10.5%"), or an amount with --fixed
        value: String,
        /// Treat the value as a fixed amount per payment
        #[arg(long)]
        fixed: bool,
        /// Mark as spending that does not grow net worth
        #[arg(long)]
        spent: bool,
    },
    /// List allocations
    List {
        /// Only allocations of this income source
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Remove an allocation
    Remove {
        /// Allocation ID
        allocation: String,
    },
}

/// Handle an income command
pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> NetWorthResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
            income_type,
        } => {
            let frequency = PayFrequency::parse(&frequency).ok_or_else(|| {
                NetWorthError::Validation(format!(
                    "Invalid frequency: '{}'. Valid: weekly, bi-weekly, semi-monthly, monthly, quarterly, annually, one-time",
                    frequency
                ))
            })?;
            let income_type = IncomeType::parse(&income_type).ok_or_else(|| {
                NetWorthError::Validation(format!(
                    "Invalid income type: '{}'. Valid: paycheck, freelance, rental, investment, other",
                    income_type
                ))
            })?;

            let source = service.add_source(&name, parse_amount(&amount)?, frequency, income_type)?;
            println!("Created income source: {}", source.name);
            println!("  Amount:    {} {}", source.amount, source.frequency);
            println!("  Type:      {}", source.income_type);
            println!("  ID:        {}", source.id);
        }

        IncomeCommands::List => {
            let sources = service.list_sources()?;
            let allocations = service.list_allocations(None)?;
            println!("{}", format_income_list(&sources, &allocations));
        }

        IncomeCommands::Remove { source } => {
            let found = find_source(&service, &source)?;
            let (removed, allocations) = service.remove_source(found.id)?;
            println!(
                "Removed income source: {} ({} allocation(s) removed)",
                removed.name,
                allocations.len()
            );
        }
    }

    Ok(())
}

/// Handle an allocation command
pub fn handle_allocation_command(storage: &Storage, cmd: AllocationCommands) -> NetWorthResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        AllocationCommands::Add {
            source,
            name,
            value,
            fixed,
            spent,
        } => {
            let found = find_source(&service, &source)?;
            let unit = if fixed {
                AllocationUnit::Fixed
            } else {
                AllocationUnit::Percentage
            };
            let value = parse_amount(value.trim().trim_end_matches('%'))?;

            let allocation = service.add_allocation(found.id, &name, unit, value, !spent)?;
            println!(
                "Added allocation {} ({}) to {}",
                allocation.name,
                allocation.format_value(),
                found.name
            );
            println!("  ID: {}", allocation.id);
        }

        AllocationCommands::List { source } => {
            let source_id = match source {
                Some(identifier) => Some(find_source(&service, &identifier)?.id),
                None => None,
            };
            println!("{}", format_allocation_list(&service.list_allocations(source_id)?));
        }

        AllocationCommands::Remove { allocation } => {
            let found = service
                .find_allocation(&allocation)?
                .ok_or_else(|| NetWorthError::allocation_not_found(&allocation))?;
            let removed = service.remove_allocation(found.id)?;
            println!("Removed allocation: {}", removed.name);
        }
    }

    Ok(())
}

fn find_source(service: &IncomeService, identifier: &str) -> NetWorthResult<IncomeSource> {
    service
        .find_source(identifier)?
        .ok_or_else(|| NetWorthError::income_source_not_found(identifier))
}
