//! Consorsbank trade confirmations and dividend advices.
//!
//! The uppercase table layout anchors every figure to a line-initial
//! label. Two generations are supported: the current one states ISIN and
//! WKN, pre-2017 dividend advices carry a WKN only. Buys and sells state
//! the Kurswert (amount); the unit price is taken from the KURS line when
//! present and derived from amount and share count otherwise.

use crate::anchor;
use crate::error::ExtractionError;
use crate::extract::{dates, identity, money, numbers};
use crate::models::{Activity, ActivityType, FileKind, Page};

use super::Broker;

const FEE_LABELS: [&str; 3] = ["PROVISION", "GRUNDGEB", "EIG. SPESEN"];
const TAX_LABELS: [&str; 4] = ["KAPST", "SOLZ", "KIST", "QUST"];

pub(super) fn can_parse_page(page: &Page, file_kind: FileKind) -> bool {
    file_kind == FileKind::Pdf
        && (page.contains("CONSORSBANK") || page.contains("Consorsbank"))
}

pub(super) fn classify(page: &Page) -> Option<ActivityType> {
    let pages = std::slice::from_ref(page);
    // VERKAUF before KAUF: the sell marker contains the buy marker.
    if anchor::find_line_starting(pages, "VERKAUF AM").is_some() {
        return Some(ActivityType::Sell);
    }
    if anchor::find_line_starting(pages, "KAUF AM").is_some() {
        return Some(ActivityType::Buy);
    }
    if page.contains("ERTRAGSGUTSCHRIFT") || page.contains("DIVIDENDENGUTSCHRIFT") {
        return Some(ActivityType::Dividend);
    }
    None
}

pub(super) fn parse(
    pages: &[Page],
    activity_type: ActivityType,
) -> Result<Activity, ExtractionError> {
    let (st_at, st_line) = anchor::find_line_starting(pages, "ST ")
        .ok_or(ExtractionError::MissingField("shares"))?;
    let shares = anchor::value_after(st_line, "ST")
        .and_then(numbers::find_quantity)
        .ok_or(ExtractionError::MissingField("shares"))?
        .normalize();
    if shares.is_zero() {
        return Err(ExtractionError::parse("shares", st_line));
    }

    let company = anchor::line_above(pages, st_at)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or(ExtractionError::MissingField("company"))?
        .to_string();

    let isin = identity::find_isin(pages);
    let wkn = identity::find_wkn(pages);
    let fee = money::sum_amounts(pages, &FEE_LABELS).normalize();
    let tax = money::sum_amounts(pages, &TAX_LABELS).normalize();

    match activity_type {
        ActivityType::Buy | ActivityType::Sell => {
            let amount = money::labeled_amount(pages, "KURSWERT")
                .ok_or(ExtractionError::MissingField("amount"))?
                .normalize();
            // Stated price wins over the derived one.
            let price = match money::labeled_amount(pages, "KURS ") {
                Some(stated) => stated.normalize(),
                None => (amount / shares).normalize(),
            };
            let label = match activity_type {
                ActivityType::Sell => "VERKAUF AM",
                _ => "KAUF AM",
            };
            let date = dates::labeled_date(pages, label)
                .ok_or(ExtractionError::MissingField("date"))?;

            Ok(Activity {
                broker: Broker::Consorsbank,
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
            let entries = money::labeled_amounts_with_currency(pages, "BRUTTO");
            let (domestic, foreign) = money::split_gross(entries);
            let fx_rate = money::labeled_amount(pages, "DEVISENKURS");

            // Gross in account currency; back-computed from the foreign
            // gross and the disclosed rate when not stated directly.
            let amount = match (domestic, &foreign, fx_rate) {
                (Some(stated), _, _) => stated.normalize(),
                (None, Some((_, gross)), Some(rate)) if !rate.is_zero() => {
                    (gross / rate).round_dp(2).normalize()
                }
                _ => return Err(ExtractionError::MissingField("amount")),
            };
            let price = (amount / shares).normalize();
            let date = dates::labeled_date(pages, "WERT")
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
                broker: Broker::Consorsbank,
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
