//! Export tables
//!
//! Projects a snapshot into the three sheets of the export workbook. Rows
//! carry plain numbers; currency formatting is left to whoever renders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BudgetSnapshot;
use crate::reports::{breakdown, percent_of, BudgetSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const SUMMARY_SHEET: &str = "Summary";
pub const INCOME_SHEET: &str = "Income";
pub const EXPENSES_SHEET: &str = "Expenses";

/// Subcategory column value of a category total row
pub const TOTAL_MARKER: &str = "TOTAL";

/// One metric of the Summary sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    /// Currency units, or a bare percentage for the savings rate
    #[serde(rename = "Amount")]
    pub amount: f64,
}

/// One income category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Amount")]
    pub amount: i64,
}

/// A category total or one of its subcategories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(rename = "Category")]
    pub category: String,
    /// Subcategory name, or [`TOTAL_MARKER`]
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Amount")]
    pub amount: i64,
    /// Not set on total rows
    #[serde(rename = "% of Category")]
    pub percent_of_category: Option<f64>,
    #[serde(rename = "% of Income")]
    pub percent_of_income: f64,
}

impl ExpenseRow {
    pub fn is_total(&self) -> bool {
        self.subcategory == TOTAL_MARKER
    }
}

/// The three export sheets, plus provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportWorkbook {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub user: String,
    pub summary: Vec<SummaryRow>,
    pub income: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
}

impl ExportWorkbook {
    /// Build every sheet from a snapshot
    pub fn from_snapshot(user: &str, snapshot: &BudgetSnapshot) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: user.to_string(),
            summary: summary_rows(snapshot),
            income: income_rows(snapshot),
            expenses: expense_rows(snapshot),
        }
    }
}

/// Total Income, Total Expenses, Savings and Savings Rate (%)
pub fn summary_rows(snapshot: &BudgetSnapshot) -> Vec<SummaryRow> {
    let summary = BudgetSummary::from_snapshot(snapshot);
    let row = |metric: &str, amount: f64| SummaryRow {
        metric: metric.to_string(),
        amount,
    };

    vec![
        row("Total Income", summary.total_income.as_f64()),
        row("Total Expenses", summary.total_expenses.as_f64()),
        row("Savings", summary.savings.as_f64()),
        row("Savings Rate (%)", summary.savings_rate),
    ]
}

/// One row per income category, zeros included
pub fn income_rows(snapshot: &BudgetSnapshot) -> Vec<IncomeRow> {
    snapshot
        .income_entries()
        .map(|(category, amount)| IncomeRow {
            category: category.name().to_string(),
            amount: amount.units(),
        })
        .collect()
}

/// Category total rows, each followed by its non-zero subcategories
pub fn expense_rows(snapshot: &BudgetSnapshot) -> Vec<ExpenseRow> {
    let income = BudgetSummary::from_snapshot(snapshot).total_income.as_f64();

    breakdown(snapshot)
        .into_iter()
        .map(|line| {
            let amount = line.amount.as_f64();
            match line.subcategory {
                None => ExpenseRow {
                    category: line.category.name().to_string(),
                    subcategory: TOTAL_MARKER.to_string(),
                    amount: line.amount.units(),
                    percent_of_category: None,
                    percent_of_income: percent_of(amount, income),
                },
                Some(sub) => ExpenseRow {
                    category: line.category.name().to_string(),
                    subcategory: sub.name().to_string(),
                    amount: line.amount.units(),
                    percent_of_category: Some(percent_of(
                        amount,
                        snapshot.category_total(line.category).as_f64(),
                    )),
                    percent_of_income: percent_of(amount, income),
                },
            }
        })
        .collect()
}
