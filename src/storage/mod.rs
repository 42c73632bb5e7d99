//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic whole-file writes and a permissive
//! loader for the durable store.

pub mod file_io;
pub mod store;

pub use file_io::{read_json_if_exists, write_json_atomic};
pub use store::{ExpenseStore, LoadOutcome, LoadStatus, LoadedState};
