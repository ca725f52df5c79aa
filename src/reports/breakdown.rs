//! Expense breakdown
//!
//! Flattens a snapshot's expenses into category lines, each followed by its
//! non-zero subcategory lines, in schema order.

use crate::models::{BudgetSnapshot, ExpenseCategory, ExpenseSubcategory, Money};

/// One row of the flattened expense listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownLine {
    pub category: ExpenseCategory,
    /// `None` for the category's own line
    pub subcategory: Option<ExpenseSubcategory>,
    /// Category name, or "{category} - {subcategory}"
    pub label: String,
    pub amount: Money,
    /// The owning category's label, on subcategory lines only
    pub parent_label: Option<String>,
}

impl BreakdownLine {
    fn for_category(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            category,
            subcategory: None,
            label: category.name().to_string(),
            amount,
            parent_label: None,
        }
    }

    fn for_subcategory(subcategory: ExpenseSubcategory, amount: Money) -> Self {
        let category = subcategory.category();
        Self {
            category,
            subcategory: Some(subcategory),
            label: format!("{} - {}", category, subcategory),
            amount,
            parent_label: Some(category.name().to_string()),
        }
    }

    pub fn is_category(&self) -> bool {
        self.subcategory.is_none()
    }

    /// The short name: the category for category lines, else the subcategory
    pub fn display_name(&self) -> &'static str {
        match self.subcategory {
            Some(sub) => sub.name(),
            None => self.category.name(),
        }
    }
}

/// Canonical breakdown order: every category line (even at zero), then its
/// subcategories with a positive amount
pub fn breakdown(snapshot: &BudgetSnapshot) -> Vec<BreakdownLine> {
    let mut lines = Vec::new();

    for &category in ExpenseCategory::all() {
        lines.push(BreakdownLine::for_category(
            category,
            snapshot.category_total(category),
        ));

        lines.extend(
            snapshot
                .category_entries(category)
                .filter(|(_, amount)| amount.is_positive())
                .map(|(sub, amount)| BreakdownLine::for_subcategory(sub, amount)),
        );
    }

    lines
}

/// Category lines sorted by amount, largest first
pub fn category_distribution(lines: &[BreakdownLine]) -> Vec<&BreakdownLine> {
    let mut categories: Vec<_> = lines.iter().filter(|l| l.is_category()).collect();
    categories.sort_by(|a, b| b.amount.cmp(&a.amount));
    categories
}

/// The `count` largest subcategory lines, largest first
pub fn top_expenses(lines: &[BreakdownLine], count: usize) -> Vec<&BreakdownLine> {
    let mut subcategories: Vec<_> = lines.iter().filter(|l| !l.is_category()).collect();
    subcategories.sort_by(|a, b| b.amount.cmp(&a.amount));
    subcategories.truncate(count);
    subcategories
}
