//! Expense Tracker - personal expense ledger with a monthly budget
//!
//! Records individual spending events, totals them by category, and compares
//! the running total against a configurable monthly limit. All state lives in
//! memory and is mirrored to a single JSON file after every change.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, categories, expense records and the budget
//! - `storage`: JSON store with permissive loading
//! - `services`: The tracker (validation, totals, persistence)
//! - `display`: Text formatting for reports
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::models::Money;
//! use expense_tracker::services::ExpenseTracker;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new();
//! let (mut tracker, _status) = ExpenseTracker::open(ExpenseStore::new(paths.store_file()));
//! tracker.add_expense(Money::from_units(200), "Food", "Lunch")?;
//! assert_eq!(tracker.calculate_total(), Money::from_units(200));
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
