//! comdirect settlement notes and dividend credits.
//!
//! Labels are separated from their values with " : " and occasionally
//! wrap, leaving the value on the following line. Buys and sells state
//! share count and unit price; the Kurswert line is optional on older
//! layouts, in which case the amount is the product of both.

use crate::anchor;
use crate::error::ExtractionError;
use crate::extract::{dates, identity, money, numbers};
use crate::models::{Activity, ActivityType, FileKind, Page};

use super::Broker;

const FEE_LABELS: [&str; 2] = ["Provision", "Grundentgelt"];
const TAX_LABELS: [&str; 3] = [
    "Kapitalertragsteuer",
    "Solidaritätszuschlag",
    "Kirchensteuer",
];

pub(super) fn can_parse_page(page: &Page, file_kind: FileKind) -> bool {
    file_kind == FileKind::Pdf && page.contains("comdirect bank AG")
}

pub(super) fn classify(page: &Page) -> Option<ActivityType> {
    if page.contains("Wertpapierverkauf") {
        return Some(ActivityType::Sell);
    }
    if page.contains("Wertpapierkauf") {
        return Some(ActivityType::Buy);
    }
    if page.contains("Ertragsgutschrift") || page.contains("Dividendengutschrift") {
        return Some(ActivityType::Dividend);
    }
    None
}

pub(super) fn parse(
    pages: &[Page],
    activity_type: ActivityType,
) -> Result<Activity, ExtractionError> {
    let company = anchor::value_near(pages, "Wertpapier-Bezeichnung")
        .ok_or_else(|| ExtractionError::MissingAnchor("Wertpapier-Bezeichnung".to_string()))?
        .to_string();

    let shares = anchor::value_near(pages, "Nominale")
        .and_then(numbers::find_quantity)
        .ok_or(ExtractionError::MissingField("shares"))?
        .normalize();
    if shares.is_zero() {
        return Err(ExtractionError::MissingField("shares"));
    }

    let isin = identity::find_isin(pages);
    let wkn = identity::find_wkn(pages);
    let fee = money::sum_amounts(pages, &FEE_LABELS).normalize();
    let tax = money::sum_amounts(pages, &TAX_LABELS).normalize();

    match activity_type {
        ActivityType::Buy | ActivityType::Sell => {
            let price = money::labeled_amount(pages, "Kurs :")
                .ok_or(ExtractionError::MissingField("price"))?
                .normalize();
            // The stated Kurswert wins; without one the amount is the
            // product of the stated price and share count.
            let amount = match money::labeled_amount(pages, "Kurswert") {
                Some(stated) => stated.normalize(),
                None => (price * shares).normalize(),
            };
            let date = dates::labeled_date(pages, "Geschäftstag")
                .ok_or(ExtractionError::MissingField("date"))?;

            Ok(Activity {
                broker: Broker::Comdirect,
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
            let entries = money::labeled_amounts_with_currency(pages, "Bruttobetrag");
            let (domestic, foreign) = money::split_gross(entries);
            let fx_rate = money::labeled_amount(pages, "Umrechn. zum Devisenkurs");

            let amount = match (domestic, &foreign, fx_rate) {
                (Some(stated), _, _) => stated.normalize(),
                (None, Some((_, gross)), Some(rate)) if !rate.is_zero() => {
                    (gross / rate).round_dp(2).normalize()
                }
                _ => return Err(ExtractionError::MissingField("amount")),
            };
            let price = (amount / shares).normalize();
            let date = dates::labeled_date(pages, "Valuta")
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
                broker: Broker::Comdirect,
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
