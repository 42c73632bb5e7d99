//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod menu;

pub use budget::{handle_set_budget, handle_status};
pub use expense::{handle_add, handle_categories, handle_category, handle_list};
pub use menu::run_menu;
