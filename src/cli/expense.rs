//! Expense CLI commands
//!
//! Adding expenses and viewing the ledger, either whole or by category.

use crate::config::Settings;
use crate::display::{
    format_budget_summary, format_category_menu, format_category_view, format_expense_table,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Money};
use crate::services::ExpenseTracker;

/// Parse a user-typed amount such as "200", "45.50" or "₹45.50"
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    Money::parse(input).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Accept either a category name, in any case, or its 1-based menu number
pub fn parse_category_arg(input: &str) -> ExpenseResult<Category> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(index) => Category::from_menu_index(index).ok_or_else(|| {
            ExpenseError::Validation(format!("Invalid category number: {}", index))
        }),
        Err(_) => Category::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(input))
            .copied()
            .ok_or_else(|| ExpenseError::UnknownCategory(input.to_string())),
    }
}

/// Add an expense and report the budget position afterwards
pub fn handle_add(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    amount: &str,
    category: &str,
    description: &str,
) -> ExpenseResult<()> {
    let amount = parse_amount(amount)?;
    let category = parse_category_arg(category)?;

    tracker.add_expense(amount, category.name(), description)?;

    println!("Expense added successfully!");
    println!(
        "{}",
        format_budget_summary(tracker.budget(), &settings.currency_symbol)
    );
    Ok(())
}

pub fn handle_list(tracker: &ExpenseTracker, settings: &Settings) -> ExpenseResult<()> {
    print!(
        "{}",
        format_expense_table(
            tracker.expenses(),
            tracker.calculate_total(),
            &settings.currency_symbol
        )
    );
    Ok(())
}

pub fn handle_category(
    tracker: &ExpenseTracker,
    settings: &Settings,
    category: &str,
) -> ExpenseResult<()> {
    let category = parse_category_arg(category)?;
    let view = tracker.view_by_category(category);
    print!("{}", format_category_view(&view, &settings.currency_symbol));
    Ok(())
}

pub fn handle_categories() -> ExpenseResult<()> {
    print!("{}", format_category_menu());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("45.50").unwrap(), Money::from_cents(4550));
        assert!(parse_amount("forty").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_category_by_name_or_number() {
        assert_eq!(parse_category_arg("food").unwrap(), Category::Food);
        assert_eq!(parse_category_arg(" HEALTH ").unwrap(), Category::Health);
        assert_eq!(parse_category_arg("2").unwrap(), Category::Transport);
        assert_eq!(parse_category_arg(" 6 ").unwrap(), Category::Other);

        assert!(parse_category_arg("0").unwrap_err().is_validation());
        assert!(parse_category_arg("7").unwrap_err().is_validation());
        assert!(matches!(
            parse_category_arg("Rent").unwrap_err(),
            ExpenseError::UnknownCategory(_)
        ));
    }
}
