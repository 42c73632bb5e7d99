//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/expense-tracker` on Linux)
//! 3. The current working directory

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// File name of the durable store
pub const STORE_FILE_NAME: &str = "expenses_data.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
    store_override: Option<PathBuf>,
}

impl TrackerPaths {
    /// Resolve paths from the environment and platform conventions
    pub fn new() -> Self {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Self {
            base_dir,
            store_override: None,
        }
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            store_override: None,
        }
    }

    /// Point the durable store at an explicit file
    pub fn with_store_file(mut self, path: PathBuf) -> Self {
        self.store_override = Some(path);
        self
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the durable store (ledger + budget limit)
    pub fn store_file(&self) -> PathBuf {
        self.store_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(STORE_FILE_NAME))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("com", "expense-tracker", "expense-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
