//! German-locale number normalization.
//!
//! Broker documents format decimals with a comma separator and dots for
//! thousands grouping ("1.234,56"). Malformed literals are rejected, never
//! silently truncated.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{AMOUNT, GERMAN_NUMBER};
use crate::error::ExtractionError;

/// Parse a complete German-locale decimal literal.
pub fn parse_german_decimal(s: &str) -> Result<Decimal, ExtractionError> {
    let trimmed = s.trim();
    if !GERMAN_NUMBER.is_match(trimmed) {
        return Err(ExtractionError::parse("decimal", trimmed));
    }

    let normalized = trimmed.replace('.', "").replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| ExtractionError::parse("decimal", trimmed))
}

/// Format a decimal back into German locale, preserving its scale.
pub fn format_german_decimal(value: &Decimal) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// First monetary amount (decimal comma mandatory) in a text fragment.
pub fn find_amount(text: &str) -> Option<Decimal> {
    AMOUNT
        .find_iter(text)
        .find_map(|m| parse_german_decimal(m.as_str()).ok())
}

/// First whitespace token that parses as a German number.
///
/// Used for share quantities, which may be stated without a decimal comma
/// ("ST 675") and sit between labels and identity text on the same line.
pub fn find_quantity(text: &str) -> Option<Decimal> {
    text.split_whitespace()
        .find_map(|token| parse_german_decimal(token).ok())
}
