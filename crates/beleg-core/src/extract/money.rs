//! Labeled monetary amounts, currencies and exchange rates.

use rust_decimal::Decimal;

use super::numbers::find_amount;
use super::patterns::CURRENCY;
use crate::anchor;
use crate::models::Page;

/// Account currency of every supported institution.
pub const ACCOUNT_CURRENCY: &str = "EUR";

/// Amount on the first line starting with `label`.
///
/// Lines carrying the label without a figure (section headers) are
/// skipped; when the label ends its line the following line is checked
/// for the wrapped value.
pub fn labeled_amount(pages: &[Page], label: &str) -> Option<Decimal> {
    for (at, line) in anchor::find_lines_starting(pages, label) {
        let after = &line.trim_start()[label.len()..];
        if let Some(amount) = find_amount(after) {
            return Some(amount);
        }
        if let Some(next) = anchor::line_below(pages, at, 1) {
            if let Some(amount) = find_amount(next) {
                return Some(amount);
            }
        }
    }
    None
}

/// Sum of all labeled amounts, zero when every label is absent.
///
/// Fee and tax lines are optional on most documents; absence is the
/// common case, not a defect.
pub fn sum_amounts(pages: &[Page], labels: &[&str]) -> Decimal {
    labels
        .iter()
        .filter_map(|label| labeled_amount(pages, label))
        .sum()
}

/// Every line starting with `label` that carries an amount, with the
/// currency code stated next to it.
///
/// Dividend advices for foreign instruments state the gross twice under
/// the same label, once per currency ("BRUTTO USD 202,50" and
/// "BRUTTO EUR 186,79").
pub fn labeled_amounts_with_currency(
    pages: &[Page],
    label: &str,
) -> Vec<(Option<String>, Decimal)> {
    anchor::find_lines_starting(pages, label)
        .into_iter()
        .filter_map(|(_, line)| {
            let after = &line.trim_start()[label.len()..];
            find_amount(after).map(|amount| (find_currency(after), amount))
        })
        .collect()
}

/// Split gross entries into the account-currency figure and the
/// foreign-currency one.
pub fn split_gross(
    entries: Vec<(Option<String>, Decimal)>,
) -> (Option<Decimal>, Option<(String, Decimal)>) {
    let mut domestic = None;
    let mut foreign = None;

    for (currency, amount) in entries {
        match currency {
            Some(code) if code != ACCOUNT_CURRENCY => {
                if foreign.is_none() {
                    foreign = Some((code, amount));
                }
            }
            _ => {
                if domestic.is_none() {
                    domestic = Some(amount);
                }
            }
        }
    }

    (domestic, foreign)
}

/// First ISO 4217 code in a text fragment.
pub fn find_currency(text: &str) -> Option<String> {
    CURRENCY.captures(text).map(|caps| caps[1].to_string())
}
