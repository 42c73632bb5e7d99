//! Budget CLI commands

use crate::config::Settings;
use crate::display::format_budget_status;
use crate::error::ExpenseResult;
use crate::services::ExpenseTracker;

use super::expense::parse_amount;

/// Print the budget report with the category breakdown
pub fn handle_status(tracker: &ExpenseTracker, settings: &Settings) -> ExpenseResult<()> {
    print!(
        "{}",
        format_budget_status(
            tracker.budget(),
            &tracker.calculate_category_totals(),
            settings
        )
    );
    Ok(())
}

/// Change the monthly limit
pub fn handle_set_budget(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    amount: &str,
) -> ExpenseResult<()> {
    let limit = parse_amount(amount)?;
    tracker.set_budget(limit)?;
    println!(
        "Budget set to {}",
        limit.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}
