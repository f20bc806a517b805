//! German-locale date normalization.

use chrono::NaiveDate;

use super::patterns::GERMAN_DATE;
use crate::anchor;
use crate::error::ExtractionError;
use crate::models::Page;

/// Parse a `DD.MM.YYYY` literal, rejecting impossible calendar dates.
pub fn parse_german_date(s: &str) -> Result<NaiveDate, ExtractionError> {
    let trimmed = s.trim();
    let caps = GERMAN_DATE
        .captures(trimmed)
        .filter(|c| c.get(0).map(|m| m.as_str() == trimmed).unwrap_or(false))
        .ok_or_else(|| ExtractionError::parse("date", trimmed))?;

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ExtractionError::parse("date", trimmed))
}

/// First well-formed `DD.MM.YYYY` date in a text fragment.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    GERMAN_DATE
        .captures_iter(text)
        .find_map(|caps| parse_german_date(&caps[0]).ok())
}

/// Date on the first line starting with `label` ("WERT 14.05.2020").
pub fn labeled_date(pages: &[Page], label: &str) -> Option<NaiveDate> {
    anchor::find_lines_starting(pages, label)
        .into_iter()
        .find_map(|(_, line)| find_date(line))
}
