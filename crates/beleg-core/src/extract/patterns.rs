//! Common regex patterns for German broker documents.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Monetary amount in German locale. The decimal comma is mandatory,
    /// which keeps date fragments ("14.05.2020") from matching.
    pub static ref AMOUNT: Regex = Regex::new(
        r"\d+(?:\.\d{3})*,\d+"
    ).unwrap();

    /// A complete German-locale number: optional thousands groups with
    /// dots, optional decimal comma. Anchored so malformed literals
    /// ("1.23,45", "12,34,56") are rejected instead of truncated.
    pub static ref GERMAN_NUMBER: Regex = Regex::new(
        r"^-?(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d+)?$"
    ).unwrap();

    /// DD.MM.YYYY date literal.
    pub static ref GERMAN_DATE: Regex = Regex::new(
        r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b"
    ).unwrap();

    /// ISIN shape: two country letters, nine alphanumerics, check digit.
    /// Candidates still have to pass the checksum in `identity`.
    pub static ref ISIN: Regex = Regex::new(
        r"\b([A-Z]{2}[A-Z0-9]{9}[0-9])\b"
    ).unwrap();

    /// WKN next to its label ("WKN: A1H99H", "WKN A1JJ54").
    pub static ref WKN_LABELED: Regex = Regex::new(
        r"WKN[:\s]+([A-Z0-9]{6})\b"
    ).unwrap();

    /// WKN in parentheses, the combined identity-line style
    /// ("DE0005552004 (555200)").
    pub static ref WKN_PAREN: Regex = Regex::new(
        r"\(([A-Z0-9]{6})\)"
    ).unwrap();

    /// ISO 4217 codes appearing in the supported document catalog.
    pub static ref CURRENCY: Regex = Regex::new(
        r"\b(EUR|USD|GBP|CHF|JPY|CAD|AUD|DKK|NOK|SEK|HKD|PLN)\b"
    ).unwrap();
}
