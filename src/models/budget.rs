//! Budget model
//!
//! Each user has one `BudgetSet`: a total and a spent amount for each of the
//! three periods. Nothing links expenses to `spent`; it stays at whatever
//! value it was created or stored with.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Period;

/// Budget total and spending for a single period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Amount budgeted for the period
    pub total: Money,

    /// Amount spent in the period
    pub spent: Money,
}

impl BudgetLine {
    /// Remaining budget (may be negative when overspent)
    pub fn remaining(&self) -> Money {
        self.total - self.spent
    }

    /// Check if spending exceeds the total
    pub fn is_overspent(&self) -> bool {
        self.spent > self.total
    }
}

/// A user's budgets for every period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetSet {
    pub today: BudgetLine,
    pub week: BudgetLine,
    pub month: BudgetLine,
}

impl BudgetSet {
    /// A set with every total and spent at zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Get the line for a period
    pub fn line(&self, period: Period) -> &BudgetLine {
        match period {
            Period::Today => &self.today,
            Period::Week => &self.week,
            Period::Month => &self.month,
        }
    }

    /// Get the line for a period mutably
    pub fn line_mut(&mut self, period: Period) -> &mut BudgetLine {
        match period {
            Period::Today => &mut self.today,
            Period::Week => &mut self.week,
            Period::Month => &mut self.month,
        }
    }

    /// Overwrite the total for a period, leaving `spent` alone
    pub fn set_total(&mut self, period: Period, total: Money) {
        self.line_mut(period).total = total;
    }

    /// Iterate over all periods with their lines
    pub fn iter(&self) -> impl Iterator<Item = (Period, &BudgetLine)> {
        Period::ALL.into_iter().map(move |p| (p, self.line(p)))
    }

    /// Whether every total and spent is zero
    pub fn is_zeroed(&self) -> bool {
        self.iter()
            .all(|(_, line)| line.total.is_zero() && line.spent.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let set = BudgetSet::zeroed();
        assert!(set.is_zeroed());
        assert_eq!(set.line(Period::Month).remaining(), Money::zero());
    }

    #[test]
    fn test_set_total_keeps_spent() {
        let mut set = BudgetSet::zeroed();
        set.line_mut(Period::Month).spent = Money::from_units(100);
        set.set_total(Period::Month, Money::from_units(5000));

        let month = set.line(Period::Month);
        assert_eq!(month.total, Money::from_units(5000));
        assert_eq!(month.spent, Money::from_units(100));
        assert_eq!(month.remaining(), Money::from_units(4900));
        assert_eq!(set.line(Period::Week).total, Money::zero());
    }

    #[test]
    fn test_overspent() {
        let mut line = BudgetLine {
            total: Money::from_units(10),
            spent: Money::zero(),
        };
        assert!(!line.is_overspent());
        line.spent = Money::from_units(12);
        assert!(line.is_overspent());
        assert!(line.remaining().is_negative());
    }

    #[test]
    fn test_iter_order() {
        let set = BudgetSet::zeroed();
        let periods: Vec<Period> = set.iter().map(|(p, _)| p).collect();
        assert_eq!(periods, vec![Period::Today, Period::Week, Period::Month]);
    }
}
