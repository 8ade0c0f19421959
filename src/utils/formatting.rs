//! Text and Number Formatting Utilities
//!
//! This module provides utility functions for formatting addresses,
//! fixed-point balances, USD values and percentages for display.

use cosmwasm_std::Uint256;

/// Format a long address for display (show first 6 and last 4 characters)
pub fn format_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        address.to_string()
    } else {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    }
}

/// Format a base-unit amount as a decimal string.
///
/// The fraction is truncated to `max_fraction` digits and trailing zeros are
/// dropped, so `1.500000` becomes `1.5` and `2.000` becomes `2`.
pub fn format_balance(value: impl Into<Uint256>, decimals: u8, max_fraction: usize) -> String {
    let digits = value.into().to_string();
    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{:0>width$}", digits, width = decimals + 1)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = &fraction[..fraction.len().min(max_fraction)];
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Format a USD value with thousands separators, e.g. `$12,345.68`
pub fn format_usd(value: f64, fraction: usize) -> String {
    let fixed = format!("{:.prec$}", value.abs(), prec = fraction);
    let (whole, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if decimals.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, decimals)
    }
}

/// Format a percentage with 2 decimal places
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}
