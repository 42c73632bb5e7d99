//! Monthly budget model
//!
//! Holds the spending limit and a cached copy of the ledger total. The budget
//! never looks at the ledger itself; its owner pushes the total in after every
//! change.

use super::money::Money;

/// Limit used until the user sets one
pub const DEFAULT_MONTHLY_LIMIT: Money = Money::from_units(50_000);

/// How close spending is to the limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetAlert {
    /// Spending is strictly above the limit
    Exceeded { over_by: Money },
    /// Spending has reached the warning threshold
    Warning { percentage_used: f64 },
    OnTrack,
}

/// Monthly spending limit plus the current cached spend
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    /// Validated by the tracker, not here
    pub monthly_limit: Money,
    current_spending: Money,
}

impl Budget {
    pub fn new(monthly_limit: Money) -> Self {
        Self {
            monthly_limit,
            current_spending: Money::zero(),
        }
    }

    /// Overwrite the cached spend with a freshly computed ledger total
    pub fn update_spending(&mut self, total: Money) {
        self.current_spending = total;
    }

    pub fn current_spending(&self) -> Money {
        self.current_spending
    }

    /// Limit minus spend; negative once over budget
    pub fn get_remaining(&self) -> Money {
        self.monthly_limit - self.current_spending
    }

    /// Spend as a percentage of the limit; 0 when the limit is 0
    pub fn get_percentage_used(&self) -> f64 {
        self.current_spending.percentage_of(self.monthly_limit)
    }

    /// Strictly over; spending exactly the limit is not over budget
    pub fn is_over_budget(&self) -> bool {
        self.current_spending > self.monthly_limit
    }

    /// Classify the budget against a warning threshold (in percent)
    pub fn alert(&self, warning_threshold: f64) -> BudgetAlert {
        if self.is_over_budget() {
            BudgetAlert::Exceeded {
                over_by: self.current_spending - self.monthly_limit,
            }
        } else if self.get_percentage_used() >= warning_threshold {
            BudgetAlert::Warning {
                percentage_used: self.get_percentage_used(),
            }
        } else {
            BudgetAlert::OnTrack
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHLY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        let budget = Budget::default();
        assert_eq!(budget.monthly_limit, Money::from_units(50000));
        assert_eq!(budget.current_spending(), Money::zero());
        assert_eq!(budget.get_remaining(), Money::from_units(50000));
        assert_eq!(budget.get_percentage_used(), 0.0);
        assert!(!budget.is_over_budget());
    }

    #[test]
    fn test_derived_values() {
        let mut budget = Budget::default();
        budget.update_spending(Money::from_units(200));

        assert_eq!(budget.get_remaining(), Money::from_units(49800));
        assert_eq!(budget.get_percentage_used(), 0.4);
    }

    #[test]
    fn test_update_spending_overwrites() {
        let mut budget = Budget::default();
        budget.update_spending(Money::from_units(300));
        budget.update_spending(Money::from_units(100));
        assert_eq!(budget.current_spending(), Money::from_units(100));
    }

    #[test]
    fn test_zero_limit_percentage_is_zero() {
        let mut budget = Budget::new(Money::zero());
        budget.update_spending(Money::from_units(10));
        assert_eq!(budget.get_percentage_used(), 0.0);
        assert!(budget.is_over_budget());
    }

    #[test]
    fn test_over_budget_is_strict() {
        let mut budget = Budget::new(Money::from_units(100));

        budget.update_spending(Money::from_units(100));
        assert!(!budget.is_over_budget());
        assert_eq!(budget.get_remaining(), Money::zero());

        budget.update_spending(Money::from_cents(10001));
        assert!(budget.is_over_budget());
        assert_eq!(budget.get_remaining(), Money::from_cents(-1));
    }

    #[test]
    fn test_alert_levels() {
        let mut budget = Budget::new(Money::from_units(1000));

        budget.update_spending(Money::from_units(500));
        assert_eq!(budget.alert(80.0), BudgetAlert::OnTrack);

        budget.update_spending(Money::from_units(800));
        assert_eq!(
            budget.alert(80.0),
            BudgetAlert::Warning {
                percentage_used: 80.0
            }
        );

        budget.update_spending(Money::from_units(1250));
        assert_eq!(
            budget.alert(80.0),
            BudgetAlert::Exceeded {
                over_by: Money::from_units(250)
            }
        );
    }
}
