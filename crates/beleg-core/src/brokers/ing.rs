//! ING-DiBa settlement notes and dividend credits.
//!
//! Identity comes as an "ISIN (WKN)" line followed by the instrument
//! name; figures sit on "Kurs"/"Kurswert" lines with the currency ahead
//! of the amount. Dividends are domestic only in this layout.

use crate::anchor;
use crate::error::ExtractionError;
use crate::extract::{dates, identity, money, numbers, patterns};
use crate::models::{Activity, ActivityType, FileKind, Page};

use super::Broker;

const FEE_LABELS: [&str; 2] = ["Handelsprovision", "Handelsplatzgebühr"];
const TAX_LABELS: [&str; 3] = [
    "Kapitalertragsteuer",
    "Solidaritätszuschlag",
    "Kirchensteuer",
];

pub(super) fn can_parse_page(page: &Page, file_kind: FileKind) -> bool {
    file_kind == FileKind::Pdf && page.contains("ING-DiBa")
}

pub(super) fn classify(page: &Page) -> Option<ActivityType> {
    // Verkauf before Kauf: the sell marker contains the buy marker.
    if page.contains("Abrechnung Verkauf") {
        return Some(ActivityType::Sell);
    }
    if page.contains("Abrechnung Kauf") {
        return Some(ActivityType::Buy);
    }
    if page.contains("Dividendengutschrift") {
        return Some(ActivityType::Dividend);
    }
    None
}

pub(super) fn parse(
    pages: &[Page],
    activity_type: ActivityType,
) -> Result<Activity, ExtractionError> {
    let identity_value = anchor::value_near(pages, "ISIN (WKN)")
        .ok_or_else(|| ExtractionError::MissingAnchor("ISIN (WKN)".to_string()))?;
    let isin = patterns::ISIN
        .find(identity_value)
        .map(|m| m.as_str().to_string())
        .filter(|candidate| identity::validate_isin(candidate));
    let wkn = identity::find_wkn_in_parens(identity_value);

    let company = anchor::value_near(pages, "Wertpapierbezeichnung")
        .ok_or(ExtractionError::MissingField("company"))?
        .to_string();

    let shares = anchor::value_near(pages, "Nominale")
        .and_then(numbers::find_quantity)
        .ok_or(ExtractionError::MissingField("shares"))?
        .normalize();
    if shares.is_zero() {
        return Err(ExtractionError::MissingField("shares"));
    }

    let fee = money::sum_amounts(pages, &FEE_LABELS).normalize();
    let tax = money::sum_amounts(pages, &TAX_LABELS).normalize();

    match activity_type {
        ActivityType::Buy | ActivityType::Sell => {
            let amount = money::labeled_amount(pages, "Kurswert")
                .ok_or(ExtractionError::MissingField("amount"))?
                .normalize();
            let price = match money::labeled_amount(pages, "Kurs ") {
                Some(stated) => stated.normalize(),
                None => (amount / shares).normalize(),
            };
            let date = dates::labeled_date(pages, "Ausführungstag")
                .ok_or(ExtractionError::MissingField("date"))?;

            Ok(Activity {
                broker: Broker::Ing,
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
            let amount = money::labeled_amount(pages, "Brutto")
                .ok_or(ExtractionError::MissingField("amount"))?
                .normalize();
            let price = (amount / shares).normalize();
            let date = dates::labeled_date(pages, "Valuta")
                .ok_or(ExtractionError::MissingField("date"))?;

            Ok(Activity {
                broker: Broker::Ing,
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
    }
}
