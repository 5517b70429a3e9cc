//! Net worth snapshot CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::format_snapshot_list;
use crate::error::NetWorthResult;
use crate::services::SnapshotService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Record a net worth value for a day (replaces that day's snapshot)
    Record {
        /// Net worth
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Record today's net worth from current account balances
    Capture,
    /// List recorded snapshots
    List {
        /// Only the trailing N days
        #[arg(short, long)]
        days: Option<u32>,
    },
}

pub fn handle_snapshot_command(
    storage: &Storage,
    clock: &dyn Clock,
    cmd: SnapshotCommands,
) -> NetWorthResult<()> {
    let service = SnapshotService::new(storage);

    match cmd {
        SnapshotCommands::Record { amount, date } => {
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => clock.today(),
            };
            let snapshot = service.record(date, parse_amount(&amount)?)?;
            println!("Recorded net worth {} for {}", snapshot.net_worth, snapshot.date);
        }

        SnapshotCommands::Capture => {
            let snapshot = service.capture(clock.today())?;
            println!("Captured net worth {} for {}", snapshot.net_worth, snapshot.date);
        }

        SnapshotCommands::List { days } => {
            let snapshots = match days {
                Some(days) => service.list_recent(days, clock.today())?,
                None => service.list()?,
            };
            println!("{}", format_snapshot_list(&snapshots));
        }
    }

    Ok(())
}
