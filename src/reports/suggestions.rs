//! Savings suggestions
//!
//! A fixed list of heuristic rules run against a snapshot's figures. Each rule
//! is a record of a predicate, a potential-savings formula and a description
//! template, so firing, amount and wording can be tested separately. Rules run
//! in list order and each yields at most one suggestion.

use serde::Serialize;

use crate::models::{BudgetSnapshot, ExpenseCategory, ExpenseSubcategory};

use super::summary::{percent_of, BudgetSummary};

/// Savings rate below which saving more is suggested (percent)
pub const TARGET_SAVINGS_RATE: f64 = 20.0;

/// Housing share of income above which housing is flagged (percent)
pub const MAX_HOUSING_SHARE: f64 = 30.0;

/// Dining out is flagged above this fraction of grocery spending
pub const DINING_TO_GROCERIES_RATIO: f64 = 0.5;

/// Entertainment share of income above which it is flagged (percent)
pub const MAX_ENTERTAINMENT_SHARE: f64 = 10.0;

/// Streaming spend above which subscriptions are flagged (currency units)
pub const STREAMING_LIMIT: f64 = 800.0;

/// Transportation share of income above which it is flagged (percent)
pub const MAX_TRANSPORTATION_SHARE: f64 = 15.0;

/// Monthly emergency fund contribution, as a fraction of income
pub const EMERGENCY_FUND_SHARE: f64 = 0.1;

/// Fraction of eating out and delivery that cooking at home could save
pub const DINING_OUT_CUT: f64 = 0.5;

/// Fraction of entertainment spending considered reducible
pub const ENTERTAINMENT_CUT: f64 = 0.3;

/// Fraction of streaming spend saved by dropping rarely used services
pub const SUBSCRIPTIONS_CUT: f64 = 0.4;

/// Fraction of transportation spending considered reducible
pub const TRANSPORTATION_CUT: f64 = 0.2;

/// Figures the rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetFigures {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub savings_rate: f64,
    pub housing_total: f64,
    pub housing_pct: f64,
    /// Eating out plus food delivery
    pub eating_out: f64,
    pub groceries: f64,
    pub entertainment_total: f64,
    pub entertainment_pct: f64,
    pub streaming: f64,
    pub transportation_total: f64,
    pub transportation_pct: f64,
    pub emergency_fund: f64,
}

impl BudgetFigures {
    pub fn from_snapshot(snapshot: &BudgetSnapshot) -> Self {
        let summary = BudgetSummary::from_snapshot(snapshot);
        let income = summary.total_income.as_f64();
        let category = |c: ExpenseCategory| snapshot.category_total(c).as_f64();
        let item = |s: ExpenseSubcategory| snapshot.expense(s).as_f64();

        let housing_total = category(ExpenseCategory::Housing);
        let entertainment_total = category(ExpenseCategory::Entertainment);
        let transportation_total = category(ExpenseCategory::Transportation);

        Self {
            income,
            expenses: summary.total_expenses.as_f64(),
            savings: summary.savings.as_f64(),
            savings_rate: summary.savings_rate,
            housing_total,
            housing_pct: percent_of(housing_total, income),
            eating_out: item(ExpenseSubcategory::EatingOut) + item(ExpenseSubcategory::FoodDelivery),
            groceries: item(ExpenseSubcategory::Groceries),
            entertainment_total,
            entertainment_pct: percent_of(entertainment_total, income),
            streaming: item(ExpenseSubcategory::StreamingServices),
            transportation_total,
            transportation_pct: percent_of(transportation_total, income),
            emergency_fund: item(ExpenseSubcategory::EmergencyFund),
        }
    }
}

/// Identifies the rule behind a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    SavingsRate,
    Housing,
    DiningOut,
    Entertainment,
    Subscriptions,
    Transportation,
    EmergencyFund,
}

/// One advisory item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub kind: RuleKind,
    pub title: String,
    pub description: String,
    /// Positive: spending that could be cut. Negative: recommended extra outlay.
    pub potential_savings: f64,
}

/// A declarative rule: when it fires, how much it is worth, how it reads
pub struct SuggestionRule {
    pub kind: RuleKind,
    pub title: &'static str,
    pub fires: fn(&BudgetFigures) -> bool,
    pub potential_savings: fn(&BudgetFigures) -> f64,
    pub describe: fn(&BudgetFigures) -> String,
}

impl SuggestionRule {
    pub fn evaluate(&self, figures: &BudgetFigures) -> Option<Suggestion> {
        if !(self.fires)(figures) {
            return None;
        }

        Some(Suggestion {
            kind: self.kind,
            title: self.title.to_string(),
            description: (self.describe)(figures),
            potential_savings: (self.potential_savings)(figures),
        })
    }
}

/// Every rule, in evaluation (and emission) order
pub static RULES: [SuggestionRule; 7] = [
    SuggestionRule {
        kind: RuleKind::SavingsRate,
        title: "Increase Your Savings Rate",
        fires: savings_rate_fires,
        potential_savings: savings_rate_potential,
        describe: savings_rate_describe,
    },
    SuggestionRule {
        kind: RuleKind::Housing,
        title: "Reduce Housing Costs",
        fires: housing_fires,
        potential_savings: housing_potential,
        describe: housing_describe,
    },
    SuggestionRule {
        kind: RuleKind::DiningOut,
        title: "Reduce Dining Out Expenses",
        fires: dining_out_fires,
        potential_savings: dining_out_potential,
        describe: dining_out_describe,
    },
    SuggestionRule {
        kind: RuleKind::Entertainment,
        title: "Review Entertainment Spending",
        fires: entertainment_fires,
        potential_savings: entertainment_potential,
        describe: entertainment_describe,
    },
    SuggestionRule {
        kind: RuleKind::Subscriptions,
        title: "Review Subscription Services",
        fires: subscriptions_fires,
        potential_savings: subscriptions_potential,
        describe: subscriptions_describe,
    },
    SuggestionRule {
        kind: RuleKind::Transportation,
        title: "Optimize Transportation Costs",
        fires: transportation_fires,
        potential_savings: transportation_potential,
        describe: transportation_describe,
    },
    SuggestionRule {
        kind: RuleKind::EmergencyFund,
        title: "Build an Emergency Fund",
        fires: emergency_fund_fires,
        potential_savings: emergency_fund_potential,
        describe: emergency_fund_describe,
    },
];

fn savings_rate_fires(f: &BudgetFigures) -> bool {
    f.savings_rate < TARGET_SAVINGS_RATE
}

fn savings_rate_potential(f: &BudgetFigures) -> f64 {
    (f.income * TARGET_SAVINGS_RATE / 100.0 - f.savings).max(0.0)
}

fn savings_rate_describe(f: &BudgetFigures) -> String {
    format!(
        "You are saving {:.1}% of your income. Aim for at least {:.0}%, which means \
         setting aside {:.0} each month.",
        f.savings_rate,
        TARGET_SAVINGS_RATE,
        f.income * TARGET_SAVINGS_RATE / 100.0
    )
}

fn housing_fires(f: &BudgetFigures) -> bool {
    f.housing_pct > MAX_HOUSING_SHARE
}

fn housing_potential(f: &BudgetFigures) -> f64 {
    (f.housing_total - f.income * MAX_HOUSING_SHARE / 100.0).max(0.0)
}

fn housing_describe(f: &BudgetFigures) -> String {
    format!(
        "Housing takes {:.1}% of your income. Keeping it under {:.0}% leaves more room \
         for savings; consider a cheaper home, a roommate or renegotiating utilities.",
        f.housing_pct, MAX_HOUSING_SHARE
    )
}

fn dining_out_fires(f: &BudgetFigures) -> bool {
    f.eating_out > f.groceries * DINING_TO_GROCERIES_RATIO && f.eating_out > 0.0
}

fn dining_out_potential(f: &BudgetFigures) -> f64 {
    f.eating_out * DINING_OUT_CUT
}

fn dining_out_describe(f: &BudgetFigures) -> String {
    format!(
        "Eating out and delivery cost {:.0}, which is {:.1}% of your grocery spending. \
         Cooking at home more often could halve this.",
        f.eating_out,
        percent_of(f.eating_out, f.groceries)
    )
}

fn entertainment_fires(f: &BudgetFigures) -> bool {
    f.entertainment_pct > MAX_ENTERTAINMENT_SHARE
}

fn entertainment_potential(f: &BudgetFigures) -> f64 {
    f.entertainment_total * ENTERTAINMENT_CUT
}

fn entertainment_describe(f: &BudgetFigures) -> String {
    format!(
        "Entertainment takes {:.1}% of your income, above the suggested {:.0}%. \
         Look for free activities or cut back on paid events.",
        f.entertainment_pct, MAX_ENTERTAINMENT_SHARE
    )
}

fn subscriptions_fires(f: &BudgetFigures) -> bool {
    f.streaming > STREAMING_LIMIT
}

fn subscriptions_potential(f: &BudgetFigures) -> f64 {
    f.streaming * SUBSCRIPTIONS_CUT
}

fn subscriptions_describe(f: &BudgetFigures) -> String {
    format!(
        "Streaming services cost {:.0} per month ({:.1}% of your income). \
         Cancel the ones you rarely use or rotate them month by month.",
        f.streaming,
        percent_of(f.streaming, f.income)
    )
}

fn transportation_fires(f: &BudgetFigures) -> bool {
    f.transportation_pct > MAX_TRANSPORTATION_SHARE
}

fn transportation_potential(f: &BudgetFigures) -> f64 {
    f.transportation_total * TRANSPORTATION_CUT
}

fn transportation_describe(f: &BudgetFigures) -> String {
    format!(
        "Transportation takes {:.1}% of your income, above the suggested {:.0}%. \
         Public transport, car sharing or cycling could lower it.",
        f.transportation_pct, MAX_TRANSPORTATION_SHARE
    )
}

fn emergency_fund_fires(f: &BudgetFigures) -> bool {
    f.emergency_fund < f.income * EMERGENCY_FUND_SHARE
}

fn emergency_fund_potential(f: &BudgetFigures) -> f64 {
    -f.income * EMERGENCY_FUND_SHARE
}

fn emergency_fund_describe(f: &BudgetFigures) -> String {
    format!(
        "You put {:.1}% of your income into an emergency fund. Setting aside {:.0}% \
         ({:.0} per month) builds a buffer for unexpected costs.",
        percent_of(f.emergency_fund, f.income),
        EMERGENCY_FUND_SHARE * 100.0,
        f.income * EMERGENCY_FUND_SHARE
    )
}

/// Run every rule against precomputed figures
pub fn evaluate(figures: &BudgetFigures) -> Vec<Suggestion> {
    RULES.iter().filter_map(|rule| rule.evaluate(figures)).collect()
}

/// Suggestions for a snapshot, in rule order
pub fn suggest(snapshot: &BudgetSnapshot) -> Vec<Suggestion> {
    evaluate(&BudgetFigures::from_snapshot(snapshot))
}

/// Total of the reducible spending; recommended extra outlays are not savings
pub fn total_potential_savings(suggestions: &[Suggestion]) -> f64 {
    suggestions
        .iter()
        .map(|s| s.potential_savings)
        .filter(|amount| *amount > 0.0)
        .sum()
}
