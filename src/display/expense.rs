//! Expense display formatting
//!
//! Formats the ledger and per-category views for terminal output.

use crate::models::{Category, Money, Record};
use crate::services::CategoryView;
use crate::storage::LoadStatus;

const TABLE_WIDTH: usize = 80;

/// Format the whole ledger as a table followed by the grand total
pub fn format_expense_table(records: &[Record], total: Money, symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses recorded yet!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str("ALL EXPENSES\n");
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));
    output.push_str(&format!(
        "{:<12} | {:<15} | {:>10} | Description\n",
        "Date", "Category", "Amount"
    ));
    output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));

    for record in records {
        output.push_str(&format!(
            "{:<12} | {:<15} | {}{:>9} | {}\n",
            record.date().format("%Y-%m-%d").to_string(),
            record.category(),
            symbol,
            record.amount(),
            record.description()
        ));
    }

    output.push_str(&format!("{}\n", "-".repeat(TABLE_WIDTH)));
    output.push_str(&format!("TOTAL SPENT: {}\n", total.format_with_symbol(symbol)));
    output.push_str(&format!("{}\n", "=".repeat(TABLE_WIDTH)));

    output
}

/// Format the records of one category with their subtotal
pub fn format_category_view(view: &CategoryView<'_>, symbol: &str) -> String {
    if view.is_empty() {
        return format!("No expenses in {} category\n", view.category);
    }

    let mut output = format!("--- {} Expenses ---\n", view.category);
    for record in &view.records {
        output.push_str(&format!(
            "{} | {} | {}\n",
            record.date().format("%Y-%m-%d"),
            record.amount().format_with_symbol(symbol),
            record.description()
        ));
    }
    output.push_str(&format!(
        "\nTotal for {}: {}\n",
        view.category,
        view.total.format_with_symbol(symbol)
    ));

    output
}

/// Numbered category list used by menus
pub fn format_category_menu() -> String {
    let mut output = String::from("Categories:\n");
    for (i, category) in Category::all().iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, category));
    }
    output
}

/// One-line summary of how the store was loaded
pub fn format_load_status(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Fresh => "No previous data found. Starting fresh!".to_string(),
        LoadStatus::Loaded { count } => {
            format!("Loaded {} expenses from previous session", count)
        }
        LoadStatus::Recovered { count, error } => format!(
            "Error loading data: {} (kept {} expenses)",
            error, count
        ),
    }
}
