//! DKB (Deutsche Kreditbank) settlement notes and dividend credits.
//!
//! Identity is stated on one combined line ("Stück 50 DEUTSCHE POST AG
//! NAMENS-AKTIEN O.N. DE0005552004 (555200)"); amounts carry a trailing
//! booking sign ("1.362,50- EUR"). Foreign dividends state the gross
//! twice under the same label, once per currency.

use rust_decimal::Decimal;

use crate::anchor;
use crate::error::ExtractionError;
use crate::extract::{dates, identity, money, numbers, patterns};
use crate::models::{Activity, ActivityType, FileKind, Page};

use super::Broker;

const FEE_LABELS: [&str; 2] = ["Provision", "Transaktionsentgelt"];
const TAX_LABELS: [&str; 3] = [
    "Kapitalertragsteuer",
    "Solidaritätszuschlag",
    "Kirchensteuer",
];

pub(super) fn can_parse_page(page: &Page, file_kind: FileKind) -> bool {
    file_kind == FileKind::Pdf && page.contains("Deutsche Kreditbank")
}

pub(super) fn classify(page: &Page) -> Option<ActivityType> {
    // Verkauf before Kauf: the sell marker contains the buy marker.
    if page.contains("Wertpapier Abrechnung Verkauf") {
        return Some(ActivityType::Sell);
    }
    if page.contains("Wertpapier Abrechnung Kauf") {
        return Some(ActivityType::Buy);
    }
    if page.contains("Dividendengutschrift") || page.contains("Ausschüttung") {
        return Some(ActivityType::Dividend);
    }
    None
}

/// Split the combined identity line into share count, company and codes.
fn identity_line(
    pages: &[Page],
) -> Result<(Decimal, String, Option<String>, Option<String>), ExtractionError> {
    let (_, line) = anchor::find_line_starting(pages, "Stück ")
        .ok_or(ExtractionError::MissingField("shares"))?;
    let value = anchor::value_after(line, "Stück")
        .ok_or(ExtractionError::MissingField("shares"))?;

    let quantity_token = value
        .split_whitespace()
        .next()
        .ok_or(ExtractionError::MissingField("shares"))?;
    let shares = numbers::parse_german_decimal(quantity_token)?.normalize();
    if shares.is_zero() {
        return Err(ExtractionError::parse("shares", line));
    }

    let rest = value[quantity_token.len()..].trim();
    let isin = patterns::ISIN
        .find(rest)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| identity::validate_isin(candidate));
    let wkn = identity::find_wkn_in_parens(rest);

    let company_end = patterns::ISIN
        .find(rest)
        .map(|m| m.start())
        .or_else(|| rest.find('('))
        .unwrap_or(rest.len());
    let company = rest[..company_end].trim().to_string();
    if company.is_empty() {
        return Err(ExtractionError::MissingField("company"));
    }

    Ok((shares, company, isin, wkn))
}

pub(super) fn parse(
    pages: &[Page],
    activity_type: ActivityType,
) -> Result<Activity, ExtractionError> {
    let (shares, company, isin, wkn) = identity_line(pages)?;
    let fee = money::sum_amounts(pages, &FEE_LABELS).normalize();
    let tax = money::sum_amounts(pages, &TAX_LABELS).normalize();

    match activity_type {
        ActivityType::Buy | ActivityType::Sell => {
            let amount = money::labeled_amount(pages, "Kurswert")
                .ok_or(ExtractionError::MissingField("amount"))?
                .normalize();
            let price = match money::labeled_amount(pages, "Ausführungskurs") {
                Some(stated) => stated.normalize(),
                None => (amount / shares).normalize(),
            };
            let date = dates::labeled_date(pages, "Schlusstag")
                .or_else(|| dates::labeled_date(pages, "Valuta"))
                .ok_or(ExtractionError::MissingField("date"))?;

            Ok(Activity {
                broker: Broker::Dkb,
                activity_type,
                date,
                company,
                isin,
                wkn,
                shares,
                price,
                amount,
                fee,
                tax,
                foreign_currency: None,
                fx_rate: None,
            })
        }
        ActivityType::Dividend => {
            let label = if anchor::find_line_starting(pages, "Dividendengutschrift").is_some() {
                "Dividendengutschrift"
            } else {
                "Ausschüttung"
            };
            let entries = money::labeled_amounts_with_currency(pages, label);
            let (domestic, foreign) = money::split_gross(entries);
            let fx_rate = money::labeled_amount(pages, "Devisenkurs");

            let amount = match (domestic, &foreign, fx_rate) {
                (Some(stated), _, _) => stated.normalize(),
                (None, Some((_, gross)), Some(rate)) if !rate.is_zero() => {
                    (gross / rate).round_dp(2).normalize()
                }
                _ => return Err(ExtractionError::MissingField("amount")),
            };
            let price = (amount / shares).normalize();
            let date = dates::labeled_date(pages, "Zahlbarkeitstag")
                .ok_or(ExtractionError::MissingField("date"))?;

            let (foreign_currency, fx_rate) = match foreign {
                Some((code, _)) => {
                    let rate = fx_rate
                        .ok_or(ExtractionError::MissingField("exchange rate"))?
                        .normalize();
                    (Some(code), Some(rate))
                }
                None => (None, None),
            };

            Ok(Activity {
                broker: Broker::Dkb,
                activity_type,
                date,
                company,
                isin,
                wkn,
                shares,
                price,
                amount,
                fee,
                tax,
                foreign_currency,
                fx_rate,
            })
        }
    }
}
