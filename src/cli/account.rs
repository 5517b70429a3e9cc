//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::display::format_account_list;
use crate::error::{NetWorthError, NetWorthResult};
use crate::models::{Account, AccountType, Money};
use crate::services::AccountService;
use crate::storage::Storage;

use super::parse_amount;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Account type (checking, savings, investment, retirement, cash, credit, loan, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Current balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with the net worth total
    List,
    /// Replace an account's balance
    SetBalance {
        /// Account name or ID
        account: String,
        /// New balance
        #[arg(allow_hyphen_values = true)]
        balance: String,
    },
    /// Remove an account
    Remove {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> NetWorthResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                NetWorthError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, investment, retirement, cash, credit, loan, other",
                    account_type
                ))
            })?;

            let balance = liability_sign(account_type, parse_amount(&balance)?);
            let account = service.create(&name, account_type, balance)?;

            println!("Created account: {}", account.name);
            println!("  Type:    {}", account.account_type);
            println!("  Balance: {}", account.balance);
            println!("  ID:      {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            println!("{}", format_account_list(&accounts));
        }

        AccountCommands::SetBalance { account, balance } => {
            let found = find_account(&service, &account)?;
            let balance = liability_sign(found.account_type, parse_amount(&balance)?);

            let updated = service.set_balance(found.id, balance)?;
            println!(
                "Updated {}: {} -> {}",
                updated.name, found.balance, updated.balance
            );
        }

        AccountCommands::Remove { account } => {
            let found = find_account(&service, &account)?;
            let removed = service.remove(found.id)?;
            println!("Removed account: {}", removed.name);
        }
    }

    Ok(())
}

fn find_account(service: &AccountService, identifier: &str) -> NetWorthResult<Account> {
    service
        .find(identifier)?
        .ok_or_else(|| NetWorthError::account_not_found(identifier))
}

/// Debt is entered as a positive number but stored as negative
fn liability_sign(account_type: AccountType, amount: Money) -> Money {
    if account_type.is_liability() && amount.is_positive() {
        -amount
    } else {
        amount
    }
}
