//! Report formatting utilities for terminal output

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(symbol: &str, amount: f64) -> String {
    // Avoid printing "-0.00" for values that round to zero
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a ratio (0..=1) as a percentage
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Format a centered header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.chars().count()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("€", 280.0), "€280.00");
        assert_eq!(format_amount("€", -280.004), "-€280.00");
        assert_eq!(format_amount("$", -0.001), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.6), "60.0%");
        assert_eq!(format_percentage(0.125), "12.5%");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("abc", 7), "  abc");
        assert_eq!(format_header("toolong", 3), "toolong");
    }
}
