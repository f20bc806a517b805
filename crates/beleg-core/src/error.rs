//! Error types for the beleg-core library.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::brokers::Broker;

/// Main error type for the beleg library.
#[derive(Error, Debug)]
pub enum BelegError {
    /// Implementation resolution failed.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Field extraction failed.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// An assembled activity violates a data-model invariant.
    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Errors from resolving a document to its owning broker handler.
///
/// Both variants are per-document conditions: they never invalidate the
/// handler registry or abort resolution of other documents in a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No registered handler claims the document (unsupported format).
    #[error("no handler recognizes this document")]
    Unrecognized,

    /// Two or more handlers claim the document. This signals overlapping
    /// detection predicates, a handler-catalog defect that must surface
    /// instead of being resolved by picking one.
    #[error("document claimed by multiple handlers: {0:?}")]
    Ambiguous(Vec<Broker>),
}

/// Errors from locating or parsing an expected field.
///
/// The owning handler decides whether the field is optional (fill a
/// default) or mandatory (abort this document's parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The anchor label was not found in the document.
    #[error("anchor not found: {0}")]
    MissingAnchor(String),

    /// A mandatory field could not be extracted.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A located substring does not match the expected shape.
    #[error("failed to parse {field}: {value:?}")]
    Parse { field: &'static str, value: String },
}

impl ExtractionError {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }
}

/// Violations of the activity invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Neither ISIN nor WKN is present.
    #[error("activity has neither ISIN nor WKN")]
    MissingIdentity,

    /// `price * shares` deviates from the stated amount beyond tolerance.
    #[error("price x shares gives {derived}, document states {stated}")]
    AmountMismatch { derived: Decimal, stated: Decimal },

    /// A foreign currency is disclosed without an exchange rate.
    #[error("foreign currency {0} disclosed without an exchange rate")]
    FxRateMissing(String),

    /// The disclosed exchange rate is zero or negative.
    #[error("exchange rate must be positive, got {0}")]
    FxRateNotPositive(Decimal),

    /// An exchange rate is present without a foreign currency.
    #[error("exchange rate {0} present without a foreign currency")]
    ForeignCurrencyMissing(Decimal),
}

/// Result type for the beleg library.
pub type Result<T> = std::result::Result<T, BelegError>;
