//! The durable store: one JSON document holding the budget limit and the
//! full ledger.
//!
//! ```json
//! {
//!     "budget_limit": 50000,
//!     "expenses": [
//!         { "amount": 200, "category": "Food", "description": "Lunch", "date": "2024-01-01" }
//!     ]
//! }
//! ```
//!
//! Saving always writes both fields. Loading tolerates either being absent and
//! never fails: whatever could be decoded before a problem is kept, and the
//! problem is reported in the [`LoadOutcome`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExpenseError;
use crate::models::{Money, Record};

use super::file_io::{read_json_if_exists, write_json_atomic};

#[derive(Serialize)]
struct StoreDocument<'a> {
    budget_limit: Money,
    expenses: &'a [Record],
}

/// Both fields optional; records are decoded one at a time so a bad entry
/// does not discard the ones before it.
#[derive(Deserialize)]
struct RawStoreDocument {
    #[serde(default)]
    budget_limit: Option<Value>,
    #[serde(default)]
    expenses: Option<Vec<Value>>,
}

/// State recovered from the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedState {
    /// `None` when the store does not carry a limit
    pub budget_limit: Option<Money>,
    pub records: Vec<Record>,
}

/// How a load went
#[derive(Debug)]
pub enum LoadStatus {
    /// No store on disk yet
    Fresh,
    /// Store read in full
    Loaded { count: usize },
    /// Store was unreadable or malformed part-way; `count` records survived
    Recovered { count: usize, error: ExpenseError },
}

/// Result of [`ExpenseStore::load`]: always carries usable state
#[derive(Debug)]
pub struct LoadOutcome {
    pub state: LoadedState,
    pub status: LoadStatus,
}

/// Handle to the durable store file
///
/// Holds only the path; each save and load opens and closes the file.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Overwrite the store with the given limit and ledger
    pub fn save(&self, budget_limit: Money, records: &[Record]) -> Result<(), ExpenseError> {
        let document = StoreDocument {
            budget_limit,
            expenses: records,
        };
        write_json_atomic(&self.path, &document)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "store saved");
        Ok(())
    }

    /// Read the store, recovering as much state as possible
    pub fn load(&self) -> LoadOutcome {
        let raw: RawStoreDocument = match read_json_if_exists(&self.path) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "no previous data found");
                return LoadOutcome {
                    state: LoadedState::default(),
                    status: LoadStatus::Fresh,
                };
            }
            Err(error) => return recovered(LoadedState::default(), error),
        };

        let mut state = LoadedState::default();

        if let Some(value) = raw.budget_limit {
            match serde_json::from_value::<Money>(value) {
                Ok(limit) => state.budget_limit = Some(limit),
                Err(e) => {
                    let error = ExpenseError::Storage(format!("Invalid budget_limit: {}", e));
                    return recovered(state, error);
                }
            }
        }

        for (index, value) in raw.expenses.unwrap_or_default().into_iter().enumerate() {
            match serde_json::from_value::<Record>(value) {
                Ok(record) => state.records.push(record),
                Err(e) => {
                    let error =
                        ExpenseError::Storage(format!("Invalid expense at index {}: {}", index, e));
                    return recovered(state, error);
                }
            }
        }

        let count = state.records.len();
        tracing::info!(path = %self.path.display(), count, "loaded expenses from previous session");
        LoadOutcome {
            state,
            status: LoadStatus::Loaded { count },
        }
    }
}

fn recovered(state: LoadedState, error: ExpenseError) -> LoadOutcome {
    let count = state.records.len();
    tracing::warn!(%error, count, "error loading data, continuing with partial state");
    LoadOutcome {
        state,
        status: LoadStatus::Recovered { count, error },
    }
}
