//! Windfall, transaction and snapshot display formatting

use crate::models::{Money, NetWorthSnapshot, Transaction, TransactionKind, Windfall};

pub fn format_windfall_list(windfalls: &[Windfall]) -> String {
    if windfalls.is_empty() {
        return "No windfalls found.".to_string();
    }

    let mut output = format!(
        "{:<12}  {:<10}  {:<24}  {:<6}  {:>14}\n",
        "ID", "Date", "Name", "Type", "Amount"
    );
    for windfall in windfalls {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<24}  {:<6}  {:>14}\n",
            windfall.id.to_string(),
            windfall.date,
            windfall.name,
            windfall.windfall_type,
            windfall.amount.to_string(),
        ));
    }
    output
}

pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let mut output = format!(
        "{:<12}  {:<10}  {:<24}  {:>14}  {}\n",
        "ID", "Date", "Name", "Amount", "Tags"
    );
    for txn in transactions {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<24}  {:>14}  {}\n",
            txn.id.to_string(),
            txn.date,
            txn.name,
            txn.signed_amount().to_string(),
            txn.tags.join(", "),
        ));
    }

    let (income, expense) = transactions
        .iter()
        .fold((Money::zero(), Money::zero()), |(i, e), t| match t.kind {
            TransactionKind::Income => (i + t.amount, e),
            TransactionKind::Expense => (i, e + t.amount),
        });
    output.push_str(&format!("\nIncome: {}  Expenses: {}\n", income, expense));

    output
}

pub fn format_snapshot_list(snapshots: &[NetWorthSnapshot]) -> String {
    if snapshots.is_empty() {
        return "No snapshots recorded.".to_string();
    }

    snapshots
        .iter()
        .map(|s| format!("{:<10}  {:>16}\n", s.date, s.net_worth.to_string()))
        .collect()
}
