//! Budget display formatting
//!
//! Renders the dashboard, the expense listing and the reports as terminal
//! tables. This is the only place amounts get their currency code.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetSnapshot, ExpenseCategory, Money, PresetName};
use crate::reports::{
    category_distribution, percent_of, top_expenses, total_potential_savings, BreakdownLine,
    BudgetSummary, Hierarchy, Suggestion,
};

use super::report::{
    double_separator, format_bar, format_header, format_money_colored, format_percentage, separator,
};

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct AmountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Node")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "% of Parent")]
    of_parent: String,
    #[tabled(rename = "% of Root")]
    of_root: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

fn title(output: &mut String, text: &str) {
    output.push_str(&format!("{}\n", format_header(text, WIDTH)));
    output.push_str(&format!("{}\n", double_separator(WIDTH)));
}

/// Summary metrics, category distribution and the largest expenses
pub fn format_dashboard(
    user: &str,
    summary: &BudgetSummary,
    lines: &[BreakdownLine],
    top_count: usize,
    currency_code: &str,
) -> String {
    let mut output = String::new();
    title(&mut output, &format!("Budget Dashboard: {}", user));

    let money = |m: Money| m.format_with_code(currency_code);
    output.push_str(&format!("  Total Income:   {:>20}\n", money(summary.total_income)));
    output.push_str(&format!("  Total Expenses: {:>20}\n", money(summary.total_expenses)));
    output.push_str(&format!(
        "  Savings:        {:>20}\n",
        format_money_colored(summary.savings, currency_code)
    ));
    output.push_str(&format!(
        "  Savings Rate:   {:>20}\n",
        format_percentage(summary.savings_rate)
    ));
    output.push_str(&format!("{}\n", separator(WIDTH)));

    let comparison = summary.comparison();
    let scale = comparison
        .iter()
        .map(|(_, amount)| amount.as_f64())
        .fold(0.0, f64::max);
    let rows: Vec<_> = comparison
        .iter()
        .map(|&(metric, amount)| ComparisonRow {
            metric,
            amount: money(amount),
            bar: format_bar(amount.as_f64(), scale, BAR_WIDTH),
        })
        .collect();
    output.push_str("\nIncome vs. Expenses\n");
    output.push_str(&render(rows));
    output.push('\n');

    if !summary.has_expenses() {
        output.push_str("\nNo expense data to display. Add expenses with 'budget expense set'.\n");
        return output;
    }

    let distribution = category_distribution(lines);
    let largest = distribution.first().map(|l| l.amount.as_f64()).unwrap_or(0.0);
    let total = summary.total_expenses.as_f64();
    let rows: Vec<_> = distribution
        .iter()
        .filter(|l| l.amount.is_positive())
        .map(|l| DistributionRow {
            category: l.label.clone(),
            amount: money(l.amount),
            share: format_percentage(percent_of(l.amount.as_f64(), total)),
            bar: format_bar(l.amount.as_f64(), largest, BAR_WIDTH),
        })
        .collect();
    output.push_str("\nExpense Distribution\n");
    output.push_str(&render(rows));
    output.push('\n');

    let rows: Vec<_> = top_expenses(lines, top_count)
        .into_iter()
        .map(|l| AmountRow {
            name: l.label.clone(),
            amount: money(l.amount),
            share: format_percentage(percent_of(l.amount.as_f64(), total)),
        })
        .collect();
    output.push_str(&format!("\nTop {} Expenses\n", rows.len()));
    output.push_str(&render(rows));
    output.push('\n');

    output
}

/// Every income and expense amount, zeros included, in schema order
pub fn format_snapshot(snapshot: &BudgetSnapshot, currency_code: &str) -> String {
    format!(
        "{}\n{}",
        format_income(snapshot, currency_code),
        format_expenses(snapshot, currency_code)
    )
}

/// Income categories and their amounts
pub fn format_income(snapshot: &BudgetSnapshot, currency_code: &str) -> String {
    let mut output = String::from("Income\n");
    for (category, amount) in snapshot.income_entries() {
        output.push_str(&format!(
            "  {:<28} {:>16}\n",
            category.name(),
            amount.format_with_code(currency_code)
        ));
    }
    output
}

/// Expense categories as a tree of subcategories
pub fn format_expenses(snapshot: &BudgetSnapshot, currency_code: &str) -> String {
    let mut output = String::from("Expenses\n");
    let money = |m: Money| m.format_with_code(currency_code);

    for &category in ExpenseCategory::all() {
        output.push_str(&format!(
            "{:<30} {:>16}\n",
            category.name(),
            money(snapshot.category_total(category))
        ));

        let entries: Vec<_> = snapshot.category_entries(category).collect();
        for (i, (sub, amount)) in entries.iter().enumerate() {
            let prefix = if i == entries.len() - 1 { "└── " } else { "├── " };
            output.push_str(&format!("  {}{:<24} {:>16}\n", prefix, sub.name(), money(*amount)));
        }
    }

    output
}

/// The canonical breakdown, with each line's share of total expenses
pub fn format_breakdown(lines: &[BreakdownLine], currency_code: &str) -> String {
    let total: f64 = lines
        .iter()
        .filter(|l| l.is_category())
        .map(|l| l.amount.as_f64())
        .sum();

    let rows: Vec<_> = lines
        .iter()
        .map(|l| AmountRow {
            name: if l.is_category() {
                l.label.clone()
            } else {
                format!("  {}", l.display_name())
            },
            amount: l.amount.format_with_code(currency_code),
            share: format_percentage(percent_of(l.amount.as_f64(), total)),
        })
        .collect();

    render(rows)
}

/// Hierarchy nodes with percent-of-parent and percent-of-root
pub fn format_hierarchy(hierarchy: &Hierarchy, currency_code: &str) -> String {
    let rows: Vec<_> = hierarchy
        .nodes()
        .iter()
        .map(|n| NodeRow {
            name: n.display_name.clone(),
            parent: n.parent_id.clone(),
            value: n.value.format_with_code(currency_code),
            of_parent: format_percentage(hierarchy.percent_of_parent(n)),
            of_root: format_percentage(hierarchy.percent_of_root(n)),
        })
        .collect();

    let mut output = render(rows);
    output.push_str(&format!(
        "\nTotal: {}\n",
        hierarchy.total().format_with_code(currency_code)
    ));
    output
}

/// Numbered suggestions and the total that could be saved
pub fn format_suggestions(suggestions: &[Suggestion], currency_code: &str) -> String {
    if suggestions.is_empty() {
        return "Your budget looks balanced. No suggestions.\n".to_string();
    }

    let mut output = String::new();
    title(&mut output, "Savings Suggestions");

    for (i, s) in suggestions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, s.title));
        output.push_str(&format!("   {}\n", s.description));

        let amount = Money::from_units(s.potential_savings.round() as i64);
        if s.potential_savings < 0.0 {
            output.push_str(&format!(
                "   Recommended monthly amount: {}\n\n",
                amount.abs().format_with_code(currency_code)
            ));
        } else {
            output.push_str(&format!(
                "   Potential savings: {}\n\n",
                amount.format_with_code(currency_code)
            ));
        }
    }

    let total = Money::from_units(total_potential_savings(suggestions).round() as i64);
    output.push_str(&format!("{}\n", separator(WIDTH)));
    output.push_str(&format!(
        "Total potential monthly savings: {}\n",
        total.format_with_code(currency_code)
    ));
    output
}

/// Saved preset names, one per line
pub fn format_preset_list(presets: &[PresetName]) -> String {
    if presets.is_empty() {
        return "No saved presets. Save one with 'budget preset save'.".to_string();
    }

    let mut output = String::from("Saved presets:\n");
    for name in presets {
        output.push_str(&format!("  {}\n", name));
    }
    output
}
