//! Budget status formatting

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Budget, BudgetAlert, Category, Money};

use super::report::format_percentage;

const STATUS_WIDTH: usize = 50;

/// Full budget report: figures, alert line and non-zero category breakdown
pub fn format_budget_status(
    budget: &Budget,
    category_totals: &BTreeMap<Category, Money>,
    settings: &Settings,
) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("{}\n", "=".repeat(STATUS_WIDTH)));
    output.push_str("BUDGET STATUS\n");
    output.push_str(&format!("{}\n", "=".repeat(STATUS_WIDTH)));
    output.push_str(&format!(
        "Monthly Budget:  {}\n",
        budget.monthly_limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Spent:     {}\n",
        budget.current_spending().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:       {}\n",
        budget.get_remaining().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Percentage Used: {}\n",
        format_percentage(budget.get_percentage_used())
    ));

    output.push('\n');
    output.push_str(&format_alert(budget.alert(settings.warning_threshold), symbol));
    output.push_str(&format!("{}\n", "=".repeat(STATUS_WIDTH)));

    output.push_str("\n--- Spending by Category ---\n");
    for (category, amount) in category_totals.iter().filter(|(_, a)| !a.is_zero()) {
        output.push_str(&format!("{:<15}: {}{:>8}\n", category, symbol, amount));
    }

    output
}

/// The alert line shown under the budget figures
pub fn format_alert(alert: BudgetAlert, symbol: &str) -> String {
    match alert {
        BudgetAlert::Exceeded { over_by } => format!(
            "BUDGET EXCEEDED! You're over by {}\n",
            over_by.format_with_symbol(symbol)
        ),
        BudgetAlert::Warning { percentage_used } => format!(
            "WARNING: You've used {} of your budget!\n",
            format_percentage(percentage_used)
        ),
        BudgetAlert::OnTrack => "Budget is on track\n".to_string(),
    }
}

/// Short line shown right after an expense is added
pub fn format_budget_summary(budget: &Budget, symbol: &str) -> String {
    format!(
        "Budget: {} used, {} remaining",
        format_percentage(budget.get_percentage_used()),
        budget.get_remaining().format_with_symbol(symbol)
    )
}
