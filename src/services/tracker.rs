//! Expense tracker service
//!
//! Owns the ledger and the budget, enforces the input policy and keeps the
//! durable store in step with memory. Every ledger change goes through one
//! append step that also refreshes the cached spend.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Category, Money, Record};
use crate::storage::{ExpenseStore, LoadStatus};

/// Records of one category in ledger order, with their subtotal
#[derive(Debug, Clone)]
pub struct CategoryView<'a> {
    pub category: Category,
    pub records: Vec<&'a Record>,
    pub total: Money,
}

impl CategoryView<'_> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The expense ledger plus its monthly budget
pub struct ExpenseTracker {
    records: Vec<Record>,
    budget: Budget,
    store: ExpenseStore,
}

impl ExpenseTracker {
    /// Build a tracker from whatever the store holds
    ///
    /// Never fails: a missing store starts empty, a damaged one keeps what
    /// could be read. The returned status says which happened.
    pub fn open(store: ExpenseStore) -> (Self, LoadStatus) {
        let outcome = store.load();

        let mut budget = Budget::default();
        if let Some(limit) = outcome.state.budget_limit {
            budget.monthly_limit = limit;
        }

        let mut tracker = Self {
            records: Vec::new(),
            budget,
            store,
        };
        tracker.append(outcome.state.records);

        (tracker, outcome.status)
    }

    /// Validate and record a new expense dated today, then persist
    ///
    /// Rejected input leaves both memory and disk untouched. If the write
    /// fails the record stays in memory and a storage error is returned.
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: &str,
        description: impl Into<String>,
    ) -> ExpenseResult<Record> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation("Amount must be positive".into()));
        }
        let category: Category = category.parse()?;

        let record = Record::new(amount, category, description, None);
        self.append([record.clone()]);
        tracing::info!(amount = %amount, %category, "expense added");

        self.save()?;
        Ok(record)
    }

    /// Change the monthly limit and persist; spend is left as is
    pub fn set_budget(&mut self, new_limit: Money) -> ExpenseResult<()> {
        if !new_limit.is_positive() {
            return Err(ExpenseError::Validation("Budget must be positive".into()));
        }

        self.budget.monthly_limit = new_limit;
        tracing::info!(limit = %new_limit, "monthly budget changed");

        self.save()
    }

    /// Sum of every amount in the ledger
    pub fn calculate_total(&self) -> Money {
        self.records.iter().map(Record::amount).sum()
    }

    /// Per-category totals, always all six categories in menu order
    pub fn calculate_category_totals(&self) -> BTreeMap<Category, Money> {
        let mut totals: BTreeMap<Category, Money> =
            Category::all().iter().map(|&c| (c, Money::zero())).collect();

        for record in &self.records {
            *totals.entry(record.category()).or_default() += record.amount();
        }

        totals
    }

    /// Records of one category, in insertion order; empty is a normal result
    pub fn view_by_category(&self, category: Category) -> CategoryView<'_> {
        let records: Vec<&Record> = self
            .records
            .iter()
            .filter(|r| r.category() == category)
            .collect();
        let total = records.iter().map(|r| r.amount()).sum();

        CategoryView {
            category,
            records,
            total,
        }
    }

    /// All records in insertion order
    pub fn expenses(&self) -> &[Record] {
        &self.records
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Write the full ledger and the current limit to the store
    pub fn save(&self) -> ExpenseResult<()> {
        self.store.save(self.budget.monthly_limit, &self.records)
    }

    fn append(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
        self.budget.update_spending(self.calculate_total());
    }
}
