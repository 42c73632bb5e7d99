//! Expense record model
//!
//! A record is one spending event. Records are immutable once built; the
//! ledger only ever appends them.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single expense
///
/// The constructor performs no validation so that previously persisted data
/// can always be rebuilt; policy checks belong to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: Money,
    category: Category,
    description: String,
    /// Serialized as `YYYY-MM-DD`
    date: NaiveDate,
}

impl Record {
    /// Create a record; `date` defaults to today (local time)
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date: date.unwrap_or_else(|| Local::now().date_naive()),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
