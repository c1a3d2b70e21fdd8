use askama::Result;
use rust_decimal::Decimal;

use crate::utils::format::{format_currency, format_percent, format_thousands};

// Custom filter to check if a Vec<String> contains a specific string.
// This allows us to use `|contains("value")` in the templates.
#[allow(clippy::ptr_arg)]
pub fn contains(s: &Vec<String>, v: &str) -> Result<bool> {
    Ok(s.iter().any(|item| item == v))
}

pub fn currency(amount: &Decimal) -> Result<String> {
    Ok(format_currency(*amount))
}

pub fn thousands(amount: &Decimal) -> Result<String> {
    Ok(format_thousands(*amount))
}

pub fn percent(value: &f64) -> Result<String> {
    Ok(format_percent(*value))
}

/// Whole number, for bar widths and rounded rates.
pub fn whole(value: &f64) -> Result<String> {
    Ok(format!("{:.0}", value))
}
