//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and computed totals.

pub mod tracker;

pub use tracker::{CategoryView, ExpenseTracker};
