//! Transaction CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::display::format_transaction_list;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::TransactionKind;
use crate::services::TransactionService;
use crate::storage::Storage;

use super::{parse_amount, parse_date};

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Description
        name: String,
        /// Amount (always positive; use --kind for direction)
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Tag, may be repeated
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List transactions
    List {
        /// Only transactions in this calendar year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Remove a transaction
    Remove {
        /// Transaction ID
        transaction: String,
    },
}

pub fn handle_transaction_command(
    storage: &Storage,
    clock: &dyn Clock,
    cmd: TransactionCommands,
) -> NetWorthResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            name,
            amount,
            date,
            kind,
            tags,
        } => {
            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                NetWorthError::Validation(format!(
                    "Invalid transaction kind: '{}'. Valid: income, expense",
                    kind
                ))
            })?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => clock.today(),
            };

            let txn = service.add(&name, parse_amount(&amount)?, date, kind, &tags)?;
            println!(
                "Recorded {} {}: {} on {}",
                txn.kind, txn.name, txn.amount, txn.date
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { year } => {
            let transactions = match year {
                Some(y) => service.for_year(y)?,
                None => service.list()?,
            };
            println!("{}", format_transaction_list(&transactions));
        }

        TransactionCommands::Remove { transaction } => {
            let found = service
                .find(&transaction)?
                .ok_or_else(|| NetWorthError::transaction_not_found(&transaction))?;
            let removed = service.remove(found.id)?;
            println!("Removed transaction: {}", removed.name);
        }
    }

    Ok(())
}
