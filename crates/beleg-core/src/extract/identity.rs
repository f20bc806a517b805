//! Instrument identity extraction (ISIN, WKN).

use super::patterns::{ISIN, WKN_LABELED, WKN_PAREN};
use crate::models::Page;

/// Validate an ISIN: two country letters, nine alphanumerics, and a
/// Luhn check digit over the letter-expanded digit string.
pub fn validate_isin(isin: &str) -> bool {
    let chars: Vec<char> = isin.chars().collect();
    if chars.len() != 12 {
        return false;
    }
    if !chars[..2].iter().all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    if !chars[11].is_ascii_digit() {
        return false;
    }

    let mut digits = Vec::with_capacity(24);
    for c in &chars {
        if let Some(d) = c.to_digit(10) {
            digits.push(d);
        } else if c.is_ascii_uppercase() {
            let v = *c as u32 - 'A' as u32 + 10;
            digits.push(v / 10);
            digits.push(v % 10);
        } else {
            return false;
        }
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// First checksum-valid ISIN in the document.
pub fn find_isin(pages: &[Page]) -> Option<String> {
    for page in pages {
        for line in &page.lines {
            for caps in ISIN.captures_iter(line) {
                let candidate = &caps[1];
                if validate_isin(candidate) {
                    return Some(candidate.to_string());
                }
            }
        }
    }
    None
}

/// First labeled WKN ("WKN: A1H99H") in the document.
pub fn find_wkn(pages: &[Page]) -> Option<String> {
    for page in pages {
        for line in &page.lines {
            if let Some(caps) = WKN_LABELED.captures(line) {
                return Some(caps[1].to_string());
            }
        }
    }
    None
}

/// WKN in parentheses on a combined identity line
/// ("DE0005552004 (555200)").
pub fn find_wkn_in_parens(line: &str) -> Option<String> {
    WKN_PAREN.captures(line).map(|caps| caps[1].to_string())
}
