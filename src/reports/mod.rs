//! Reports for the budget analyzer
//!
//! Pure functions over a [`BudgetSnapshot`](crate::models::BudgetSnapshot):
//! the summary totals, the flattened expense breakdown, the two-level
//! hierarchy for charting, and the rule-based savings suggestions.

pub mod breakdown;
pub mod hierarchy;
pub mod suggestions;
pub mod summary;

pub use breakdown::{breakdown, category_distribution, top_expenses, BreakdownLine};
pub use hierarchy::{Hierarchy, HierarchyNode};
pub use suggestions::{
    evaluate, suggest, total_potential_savings, BudgetFigures, RuleKind, Suggestion,
    SuggestionRule, RULES,
};
pub use summary::{percent_of, savings, savings_rate, total_expenses, total_income, BudgetSummary};
