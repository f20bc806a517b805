//! Stateless field extractors.
//!
//! Each extractor composes the anchor utilities with the German-locale
//! normalizer and returns a typed value, leaving the decision whether a
//! miss is fatal to the owning broker handler.

pub mod dates;
pub mod identity;
pub mod money;
pub mod numbers;
pub mod patterns;

pub use dates::{find_date, labeled_date, parse_german_date};
pub use identity::{find_isin, find_wkn, find_wkn_in_parens, validate_isin};
pub use money::{
    find_currency, labeled_amount, labeled_amounts_with_currency, split_gross, sum_amounts,
};
pub use numbers::{find_amount, find_quantity, format_german_decimal, parse_german_decimal};
