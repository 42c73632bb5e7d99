//! Display formatting for terminal output
//!
//! Pure string builders; printing is left to the CLI layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_alert, format_budget_status, format_budget_summary};
pub use expense::{
    format_category_menu, format_category_view, format_expense_table, format_load_status,
};
