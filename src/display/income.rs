//! Income source and allocation display formatting

use crate::models::{BudgetAllocation, IncomeSource};

/// Format income sources, each followed by its allocations
pub fn format_income_list(sources: &[IncomeSource], allocations: &[BudgetAllocation]) -> String {
    if sources.is_empty() {
        return "No income sources found.".to_string();
    }

    let mut output = String::new();
    for source in sources {
        output.push_str(&format!(
            "{}  {} ({}) {} {}{}\n",
            source.id,
            source.name,
            source.income_type,
            source.amount,
            source.frequency,
            if source.is_paycheck() { "" } else { "  [not used for rate]" },
        ));

        let owned: Vec<_> = allocations
            .iter()
            .filter(|a| a.income_source_id == source.id)
            .collect();
        if owned.is_empty() {
            output.push_str("    (no allocations)\n");
        }
        for allocation in owned {
            output.push_str(&format_allocation_line(allocation));
        }
    }

    output
}

/// Format allocations as a flat list
pub fn format_allocation_list(allocations: &[BudgetAllocation]) -> String {
    if allocations.is_empty() {
        return "No allocations found.".to_string();
    }

    allocations.iter().map(format_allocation_line).collect()
}

fn format_allocation_line(allocation: &BudgetAllocation) -> String {
    format!(
        "    {}  {:<24} {:>12}  {}\n",
        allocation.id,
        allocation.name,
        allocation.format_value(),
        if allocation.increases_net_worth {
            "grows net worth"
        } else {
            "spent"
        }
    )
}
