//! Budget summary
//!
//! Totals, savings and savings rate for one snapshot. Every ratio in the
//! crate goes through [`percent_of`], which defines a zero denominator as a
//! zero result.

use crate::models::{BudgetSnapshot, ExpenseCategory, Money};

/// `part / whole * 100`, or `0.0` when `whole` is zero
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Sum of all income amounts
pub fn total_income(snapshot: &BudgetSnapshot) -> Money {
    snapshot.income_entries().map(|(_, amount)| amount).sum()
}

/// Sum of every subcategory amount across all categories
pub fn total_expenses(snapshot: &BudgetSnapshot) -> Money {
    ExpenseCategory::all()
        .iter()
        .map(|&c| snapshot.category_total(c))
        .sum()
}

/// Income minus expenses; negative when overspending
pub fn savings(income: Money, expenses: Money) -> Money {
    income - expenses
}

/// Savings as a percentage of income, `0.0` without income
pub fn savings_rate(income: Money, savings: Money) -> f64 {
    percent_of(savings.as_f64(), income.as_f64())
}

/// Headline figures of a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub savings: Money,
    /// Percentage, e.g. `20.0` for a fifth of income saved
    pub savings_rate: f64,
}

impl BudgetSummary {
    pub fn from_snapshot(snapshot: &BudgetSnapshot) -> Self {
        let total_income = total_income(snapshot);
        let total_expenses = total_expenses(snapshot);
        let savings = savings(total_income, total_expenses);

        Self {
            total_income,
            total_expenses,
            savings,
            savings_rate: savings_rate(total_income, savings),
        }
    }

    /// Income vs. expenses vs. savings, for side-by-side comparison
    pub fn comparison(&self) -> [(&'static str, Money); 3] {
        [
            ("Income", self.total_income),
            ("Expenses", self.total_expenses),
            ("Savings", self.savings),
        ]
    }

    /// Whether there is any expense data to break down
    pub fn has_expenses(&self) -> bool {
        !self.total_expenses.is_zero()
    }
}
