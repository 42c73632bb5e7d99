//! Core data models for the expense tracker
//!
//! This module contains the data structures of the spending domain: money
//! amounts, categories, expense records and the monthly budget.

pub mod budget;
pub mod category;
pub mod money;
pub mod record;

pub use budget::{Budget, BudgetAlert, DEFAULT_MONTHLY_LIMIT};
pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use record::Record;
