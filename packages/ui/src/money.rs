//! Money formatting shared by the contract views.

use crate::client::app_config;

/// Format a number the way the views show money: thousands separated by
/// commas, cents only when non-zero, a leading minus for negative values.
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut out = String::new();
    if value.is_sign_negative() && cents != 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if frac != 0 {
        out.push_str(&format!(".{:02}", frac));
    }
    out
}

/// [`format_amount`] with a currency symbol, sign first: `-$1,234.50`.
pub fn format_money(symbol: &str, value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, amount),
    }
}

/// [`format_money`] with the configured currency symbol.
pub fn money(value: f64) -> String {
    format_money(&app_config().display.currency_symbol, value)
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts_have_no_cents() {
        assert_eq!(format_amount(5000.0), "5,000");
        assert_eq!(format_amount(200.0), "200");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(1_000_000.0), "1,000,000");
        assert_eq!(format_amount(12_345.0), "12,345");
        assert_eq!(format_amount(999.0), "999");
    }

    #[test]
    fn test_cents_kept_when_non_zero() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(0.25), "0.25");
    }

    #[test]
    fn test_negative_sign_comes_first() {
        assert_eq!(format_amount(-600.0), "-600");
        assert_eq!(format_money("$", -200.0), "-$200");
    }

    #[test]
    fn test_symbol_prefix() {
        assert_eq!(format_money("$", 1500.0), "$1,500");
        assert_eq!(format_money("Rs ", 1500.0), "Rs 1,500");
    }
}
