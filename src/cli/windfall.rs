//! Windfall CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::display::format_windfall_list;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::WindfallType;
use crate::services::WindfallService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

#[derive(Subcommand)]
pub enum WindfallCommands {
    /// Add a one-off income event
    Add {
        /// Name (e.g., "Annual bonus")
        name: String,
        /// Amount
        amount: String,
        /// Date the money lands (YYYY-MM-DD)
        date: String,
        /// Windfall type (bonus, rsu, espp, other)
        #[arg(short = 't', long = "type", default_value = "other")]
        windfall_type: String,
    },
    /// List windfalls
    List {
        /// Only windfalls in this calendar year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Remove a windfall
    Remove {
        /// Windfall name or ID
        windfall: String,
    },
}

pub fn handle_windfall_command(storage: &Storage, cmd: WindfallCommands) -> NetWorthResult<()> {
    let service = WindfallService::new(storage);

    match cmd {
        WindfallCommands::Add {
            name,
            amount,
            date,
            windfall_type,
        } => {
            let windfall_type = WindfallType::parse(&windfall_type).ok_or_else(|| {
                NetWorthError::Validation(format!(
                    "Invalid windfall type: '{}'. Valid: bonus, rsu, espp, other",
                    windfall_type
                ))
            })?;

            let windfall = service.add(
                &name,
                parse_amount(&amount)?,
                parse_date(&date)?,
                windfall_type,
            )?;
            println!(
                "Added windfall: {} {} on {}",
                windfall.name, windfall.amount, windfall.date
            );
            println!("  ID: {}", windfall.id);
        }

        WindfallCommands::List { year } => {
            let windfalls: Vec<_> = service
                .list()?
                .into_iter()
                .filter(|w| year.map_or(true, |y| w.date.year() == y))
                .collect();
            println!("{}", format_windfall_list(&windfalls));
        }

        WindfallCommands::Remove { windfall } => {
            let found = service
                .find(&windfall)?
                .ok_or_else(|| NetWorthError::windfall_not_found(&windfall))?;
            let removed = service.remove(found.id)?;
            println!("Removed windfall: {}", removed.name);
        }
    }

    Ok(())
}
