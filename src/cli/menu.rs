//! Interactive numbered menu
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so the loop runs the same against a terminal or a test buffer. Bad input
//! and rejected values are reported and the menu is shown again; end of input
//! behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::report::{format_header, separator};
use crate::display::{
    format_budget_status, format_budget_summary, format_category_menu, format_category_view,
    format_expense_table,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::services::ExpenseTracker;

use super::expense::parse_amount;

const MENU_WIDTH: usize = 50;

/// Run the menu until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> ExpenseResult<()> {
    writeln!(output, "Welcome to Personal Expense Tracker!")?;

    loop {
        write_menu(&mut output)?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_expense(tracker, settings, &mut input, &mut output)?,
            "2" => write!(
                output,
                "{}",
                format_expense_table(
                    tracker.expenses(),
                    tracker.calculate_total(),
                    &settings.currency_symbol
                )
            )?,
            "3" => {
                if let Some(category) = select_category(&mut input, &mut output)? {
                    let view = tracker.view_by_category(category);
                    write!(output, "{}", format_category_view(&view, &settings.currency_symbol))?;
                }
            }
            "4" => write!(
                output,
                "{}",
                format_budget_status(
                    tracker.budget(),
                    &tracker.calculate_category_totals(),
                    settings
                )
            )?,
            "5" => set_budget(tracker, settings, &mut input, &mut output)?,
            "6" => {
                writeln!(output, "Thank you for using Expense Tracker!")?;
                writeln!(output, "All data has been saved automatically.")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice! Please enter 1-6")?,
        }
    }

    writeln!(output, "All data has been saved automatically.")?;
    Ok(())
}

fn write_menu<W: Write>(output: &mut W) -> ExpenseResult<()> {
    writeln!(output)?;
    writeln!(output, "{}", separator(MENU_WIDTH))?;
    writeln!(output, "{}", format_header("PERSONAL EXPENSE TRACKER", MENU_WIDTH))?;
    writeln!(output, "{}", separator(MENU_WIDTH))?;
    writeln!(output, "1. Add Expense")?;
    writeln!(output, "2. View All Expenses")?;
    writeln!(output, "3. View by Category")?;
    writeln!(output, "4. Budget Status")?;
    writeln!(output, "5. Set Monthly Budget")?;
    writeln!(output, "6. Exit")?;
    writeln!(output, "{}", separator(MENU_WIDTH))?;
    Ok(())
}

/// Print `message` and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> ExpenseResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn select_category<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<Option<Category>> {
    write!(output, "{}", format_category_menu())?;
    let Some(answer) = prompt(input, output, "Select category (1-6): ")? else {
        return Ok(None);
    };

    let Ok(index) = answer.parse::<usize>() else {
        writeln!(output, "Invalid input!")?;
        return Ok(None);
    };

    match Category::from_menu_index(index) {
        Some(category) => Ok(Some(category)),
        None => {
            writeln!(output, "Invalid category number!")?;
            Ok(None)
        }
    }
}

fn add_expense<R: BufRead, W: Write>(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    writeln!(output, "--- Add New Expense ---")?;
    let prompt_text = format!("Enter amount ({}): ", settings.currency_symbol);
    let Some(amount) = prompt(input, output, &prompt_text)? else {
        return Ok(());
    };
    let amount = match parse_amount(&amount) {
        Ok(amount) => amount,
        Err(_) => {
            writeln!(output, "Invalid input! Please enter numbers correctly.")?;
            return Ok(());
        }
    };

    let Some(category) = select_category(input, output)? else {
        return Ok(());
    };
    let description = prompt(input, output, "Enter description: ")?.unwrap_or_default();

    match tracker.add_expense(amount, category.name(), description) {
        Ok(_) => writeln!(output, "Expense added successfully!")?,
        Err(e) => report_failure(output, &e)?,
    }
    writeln!(
        output,
        "{}",
        format_budget_summary(tracker.budget(), &settings.currency_symbol)
    )?;
    Ok(())
}

fn set_budget<R: BufRead, W: Write>(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> ExpenseResult<()> {
    let prompt_text = format!("Enter monthly budget ({}): ", settings.currency_symbol);
    let Some(answer) = prompt(input, output, &prompt_text)? else {
        return Ok(());
    };
    let limit = match parse_amount(&answer) {
        Ok(limit) => limit,
        Err(_) => {
            writeln!(output, "Invalid amount!")?;
            return Ok(());
        }
    };

    match tracker.set_budget(limit) {
        Ok(()) => writeln!(
            output,
            "Budget set to {}",
            limit.format_with_symbol(&settings.currency_symbol)
        )?,
        Err(e) => report_failure(output, &e)?,
    }
    Ok(())
}

/// Rejections and failed saves are shown, never fatal; memory is kept either way
fn report_failure<W: Write>(output: &mut W, error: &ExpenseError) -> ExpenseResult<()> {
    match error {
        ExpenseError::Validation(message) => writeln!(output, "{}", message)?,
        ExpenseError::UnknownCategory(_) => writeln!(output, "{}", error)?,
        other => {
            tracing::error!(error = %other, "failed to save expenses");
            writeln!(output, "Could not save data: {}", other)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::ExpenseStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(temp_dir: &TempDir, script: &str) -> (ExpenseTracker, String) {
        let store = ExpenseStore::new(temp_dir.path().join("expenses_data.json"));
        let (mut tracker, _) = ExpenseTracker::open(store);
        let mut output = Vec::new();
        run_menu(
            &mut tracker,
            &Settings::default(),
            Cursor::new(script.to_string()),
            &mut output,
        )
        .unwrap();
        (tracker, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_add_and_exit() {
        let temp_dir = TempDir::new().unwrap();
        let (tracker, output) = run(&temp_dir, "1\n200\n1\nLunch\n6\n");

        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses()[0].description(), "Lunch");
        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("Budget: 0.4% used, ₹49800.00 remaining"));
        assert!(output.contains("Thank you for using Expense Tracker!"));
    }

    #[test]
    fn test_bad_amount_returns_to_menu() {
        let temp_dir = TempDir::new().unwrap();
        let (tracker, output) = run(&temp_dir, "1\nabc\n6\n");

        assert!(tracker.expenses().is_empty());
        assert!(output.contains("Invalid input! Please enter numbers correctly."));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let (tracker, output) = run(&temp_dir, "1\n-5\n1\nx\n6\n");

        assert!(tracker.expenses().is_empty());
        assert!(output.contains("Amount must be positive"));
    }

    #[test]
    fn test_bad_category_number() {
        let temp_dir = TempDir::new().unwrap();
        let (tracker, output) = run(&temp_dir, "1\n10\n9\n6\n");

        assert!(tracker.expenses().is_empty());
        assert!(output.contains("Invalid category number!"));
    }

    #[test]
    fn test_view_by_category_and_status() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "1\n30\n2\nBus\n3\n2\n3\n1\n4\n6\n");

        assert!(output.contains("--- Transport Expenses ---"));
        assert!(output.contains("Total for Transport: ₹30.00"));
        assert!(output.contains("No expenses in Food category"));
        assert!(output.contains("BUDGET STATUS"));
    }

    #[test]
    fn test_set_budget() {
        let temp_dir = TempDir::new().unwrap();
        let (tracker, output) = run(&temp_dir, "5\n0\n5\n1000\n6\n");

        assert!(output.contains("Budget must be positive"));
        assert!(output.contains("Budget set to ₹1000.00"));
        assert_eq!(tracker.budget().monthly_limit, Money::from_units(1000));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let temp_dir = TempDir::new().unwrap();
        let (_, output) = run(&temp_dir, "9\n");

        assert!(output.contains("Invalid choice! Please enter 1-6"));
        assert!(output.ends_with("All data has been saved automatically.\n"));
    }
}
