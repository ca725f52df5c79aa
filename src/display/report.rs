//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard and the reports.

use crate::models::Money;

/// Format a money amount with its currency code, colored by sign
pub fn format_money_colored(amount: Money, currency_code: &str) -> String {
    let text = amount.format_with_code(currency_code);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    let magnitude = pct.abs();
    if magnitude < 0.1 && magnitude > 0.0 {
        format!("{:.2}%", pct)
    } else if magnitude < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(70.67), "71%");
        assert_eq!(format_percentage(-5.5), "-5.5%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 0.0, 4), "    ");
    }

    #[test]
    fn test_format_money_colored() {
        assert_eq!(format_money_colored(Money::zero(), "NOK"), "0 NOK");
        assert!(format_money_colored(Money::from_units(-5), "NOK").starts_with("\x1b[31m"));
        assert!(format_money_colored(Money::from_units(1200), "NOK").contains("1,200 NOK"));
    }

    #[test]
    fn test_header_and_separators() {
        assert_eq!(format_header("Hi", 6), "  Hi");
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
