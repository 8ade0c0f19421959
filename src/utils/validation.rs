//! Validation utilities for user-entered amounts
//!
//! Amounts are unsigned fixed-point integers scaled by `10^decimals`.
//! [`read_amount`] classifies input: not a number at all, an exact amount,
//! or a number that exists but cannot be expressed in base units (too large
//! for `u128`, or finer than the token's smallest unit). [`try_parse_amount`]
//! accepts only the exact case and [`parse_amount`] normalizes everything
//! else to zero.

use std::sync::OnceLock;

use cosmwasm_std::Uint128;
use regex::Regex;

use crate::error::Error;

/// Decimals assumed when an amount is parsed without a token context
pub const DEFAULT_DECIMALS: u8 = 18;

/// Largest scale whose power of ten still fits in a `u128`
const MAX_DECIMALS: u8 = 38;

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+\.?\d*|\.\d+)$").expect("amount pattern is a valid regex")
    })
}

/// User input read as a fixed-point amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAmount {
    /// Empty or not a plain non-negative decimal number
    Invalid,
    /// Exact value in base units
    Exact(Uint128),
    /// A number above `u128::MAX` base units
    Overflow,
    /// A number with non-zero digits below the smallest unit.
    ///
    /// The value lies strictly between `floor` and `floor + 1` base units.
    Imprecise { floor: Uint128 },
}

impl ParsedAmount {
    /// Base units that can be sent; zero unless the input is exact
    pub fn value(&self) -> Uint128 {
        match self {
            ParsedAmount::Exact(amount) => *amount,
            _ => Uint128::zero(),
        }
    }

    /// Whether the entered number is strictly greater than `balance`
    pub fn exceeds(&self, balance: Uint128) -> bool {
        match self {
            ParsedAmount::Invalid => false,
            ParsedAmount::Exact(amount) => *amount > balance,
            ParsedAmount::Overflow => true,
            ParsedAmount::Imprecise { floor } => *floor >= balance,
        }
    }
}

fn scan(input: &str, decimals: u8) -> Result<ParsedAmount, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("amount is empty");
    }
    if decimals > MAX_DECIMALS {
        return Err("token decimals out of range");
    }
    if !amount_pattern().is_match(trimmed) {
        return Err("not a decimal number");
    }

    let places = decimals as usize;
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let (fraction, excess) = fraction.split_at(fraction.len().min(places));
    let imprecise = excess.bytes().any(|digit| digit != b'0');

    // The pattern leaves only digits, so a failed parse means overflow
    let whole = if whole.is_empty() {
        0
    } else {
        match whole.parse::<u128>() {
            Ok(whole) => whole,
            Err(_) => return Ok(ParsedAmount::Overflow),
        }
    };
    // At most 38 digits, which always fits
    let fraction = if fraction.is_empty() {
        0
    } else {
        format!("{:0<width$}", fraction, width = places)
            .parse::<u128>()
            .map_err(|_| "not a decimal number")?
    };

    let scaled = whole
        .checked_mul(10u128.pow(decimals as u32))
        .and_then(|scaled| scaled.checked_add(fraction));
    Ok(match scaled {
        None => ParsedAmount::Overflow,
        Some(floor) if imprecise => ParsedAmount::Imprecise {
            floor: Uint128::new(floor),
        },
        Some(amount) => ParsedAmount::Exact(Uint128::new(amount)),
    })
}

/// Classify a decimal string against a token's decimals
pub fn read_amount(input: &str, decimals: u8) -> ParsedAmount {
    match scan(input, decimals) {
        Ok(parsed) => parsed,
        Err(reason) => {
            tracing::trace!("Amount '{}' is not a number: {}", input, reason);
            ParsedAmount::Invalid
        }
    }
}

/// Parse a decimal string into exact base units
pub fn try_parse_amount(input: &str, decimals: u8) -> Result<Uint128, Error> {
    let reason = match scan(input, decimals) {
        Ok(ParsedAmount::Exact(amount)) => return Ok(amount),
        Ok(ParsedAmount::Overflow) => "amount too large",
        Ok(ParsedAmount::Imprecise { .. }) => "too many decimal places",
        Ok(ParsedAmount::Invalid) => "not a decimal number",
        Err(reason) => reason,
    };
    Err(Error::InvalidAmount {
        input: input.to_string(),
        reason: reason.to_string(),
    })
}

/// Parse a decimal string into base units, normalizing unusable input to zero
pub fn parse_amount(input: &str, decimals: u8) -> Uint128 {
    read_amount(input, decimals).value()
}

/// True when the input does not describe a sendable positive amount
pub fn is_empty_value(input: &str, decimals: u8) -> bool {
    parse_amount(input, decimals).is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional_amounts() {
        assert_eq!(
            try_parse_amount("1", 18).unwrap(),
            Uint128::new(1_000_000_000_000_000_000)
        );
        assert_eq!(try_parse_amount("1.5", 6).unwrap(), Uint128::new(1_500_000));
        assert_eq!(try_parse_amount(".25", 2).unwrap(), Uint128::new(25));
        assert_eq!(try_parse_amount("3.", 0).unwrap(), Uint128::new(3));
        assert_eq!(try_parse_amount(" 007 ", 1).unwrap(), Uint128::new(70));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "   ", ".", "-1", "1e18", "abc", "1.2.3", "1,5", "0x10"] {
            assert!(try_parse_amount(input, 18).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_excess_precision_and_overflow() {
        assert!(try_parse_amount("0.001", 2).is_err());
        assert!(try_parse_amount("1", 39).is_err());
        assert!(try_parse_amount("999999999999999999999999", 18).is_err());
    }

    #[test]
    fn test_invalid_input_normalizes_to_zero() {
        assert_eq!(parse_amount("abc", 18), Uint128::zero());
        assert!(is_empty_value("", 18));
        assert!(is_empty_value("0.000", 18));
        assert!(!is_empty_value("0.1", 18));
    }

    #[test]
    fn test_read_amount_keeps_unrepresentable_numbers() {
        assert_eq!(read_amount("abc", 18), ParsedAmount::Invalid);
        assert_eq!(
            read_amount("1000000000000000000000000000000000000000", 0),
            ParsedAmount::Overflow
        );
        assert_eq!(read_amount("1000000000000000000000", 18), ParsedAmount::Overflow);
        assert_eq!(
            read_amount("2.0051", 2),
            ParsedAmount::Imprecise {
                floor: Uint128::new(200)
            }
        );
        assert_eq!(read_amount("1.2500", 2), ParsedAmount::Exact(Uint128::new(125)));
    }

    #[test]
    fn test_exceeds_balance() {
        let balance = Uint128::new(500);
        assert!(!ParsedAmount::Invalid.exceeds(balance));
        assert!(ParsedAmount::Overflow.exceeds(Uint128::MAX));
        assert!(!ParsedAmount::Exact(balance).exceeds(balance));
        assert!(ParsedAmount::Imprecise { floor: balance }.exceeds(balance));
        assert!(!ParsedAmount::Imprecise {
            floor: Uint128::new(499)
        }
        .exceeds(balance));
        assert_eq!(ParsedAmount::Overflow.value(), Uint128::zero());
    }
}
