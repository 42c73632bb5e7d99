//! Expense categories
//!
//! The category set is closed: every record belongs to exactly one of six
//! fixed labels, and anything else is rejected at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// One of the six fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Other,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Other,
    ];

    /// Get all categories in menu order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The label stored on disk and shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Map a 1-based menu selection to a category
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    /// Exact match against the fixed labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| ExpenseError::UnknownCategory(s.to_string()))
    }
}
