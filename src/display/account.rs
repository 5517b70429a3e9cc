//! Account display formatting

use crate::models::{Account, Money};

/// Format a list of accounts as a table with a net worth total
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "ID",
        "Name",
        "Type",
        "Balance",
        name_width = name_width,
        type_width = type_width,
    ));

    let separator = format!(
        "{:-<12}  {:-<name_width$}  {:-<type_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    );
    output.push_str(&separator);

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
            account.id.to_string(),
            account.name,
            account.account_type,
            account.balance.to_string(),
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();

    output.push_str(&separator);
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<type_width$}  {:>14}\n",
        "",
        "NET WORTH",
        "",
        total.to_string(),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}
