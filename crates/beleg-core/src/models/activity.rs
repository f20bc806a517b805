//! Normalized financial-activity records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brokers::Broker;
use crate::error::InvariantViolation;

/// Transaction kind of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Buy,
    Sell,
    Dividend,
}

/// One normalized transaction extracted from a broker document.
///
/// Constructed once per detected transaction and never mutated after
/// assembly. Serialized field names match the upstream activity objects
/// consumed by portfolio tooling (`foreignCurrency`, `fxRate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Owning broker handler.
    pub broker: Broker,

    /// Transaction kind.
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Settlement/value date.
    pub date: NaiveDate,

    /// Issuer/instrument display name.
    pub company: String,

    /// 12-character security identifier. Optional: some historical
    /// documents state a WKN only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,

    /// German national security code. Optional for foreign instruments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wkn: Option<String>,

    /// Quantity, fractional for dividend-reinvestment positions.
    pub shares: Decimal,

    /// Unit price in account currency. Derived as `amount / shares`
    /// when the document does not state it directly.
    pub price: Decimal,

    /// Gross monetary amount in account currency.
    pub amount: Decimal,

    /// Transaction fee, 0 when no fee label is present.
    pub fee: Decimal,

    /// Withheld tax, 0 when no tax label is present.
    pub tax: Decimal,

    /// ISO 4217 code, present only for foreign-currency instruments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_currency: Option<String>,

    /// Foreign-to-account-currency rate, present iff `foreign_currency` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx_rate: Option<Decimal>,
}

impl Activity {
    /// Rounding tolerance for the `price * shares ~= amount` cross-check,
    /// in account currency units.
    pub fn amount_epsilon() -> Decimal {
        Decimal::new(1, 2)
    }

    /// Check the data-model invariants.
    ///
    /// Violations are parse defects of the activity they belong to; the
    /// caller reports them per-activity and keeps parsing siblings.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if self.isin.is_none() && self.wkn.is_none() {
            return Err(InvariantViolation::MissingIdentity);
        }

        match (&self.foreign_currency, &self.fx_rate) {
            (Some(code), None) => {
                return Err(InvariantViolation::FxRateMissing(code.clone()));
            }
            (Some(_), Some(rate)) if *rate <= Decimal::ZERO => {
                return Err(InvariantViolation::FxRateNotPositive(*rate));
            }
            (None, Some(rate)) => {
                return Err(InvariantViolation::ForeignCurrencyMissing(*rate));
            }
            _ => {}
        }

        let derived = self.price * self.shares;
        if (derived - self.amount).abs() >= Self::amount_epsilon() {
            return Err(InvariantViolation::AmountMismatch {
                derived,
                stated: self.amount,
            });
        }

        Ok(())
    }
}

/// Per-document parse status reported to downstream collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    /// Every detected transaction was extracted and validated.
    Parsed,
    /// Some transactions were extracted, others were dropped as defects.
    PartiallyParsed,
    /// The document matched no known template or transaction category.
    Unrecognized,
}

/// Handler output: extracted activities plus a per-document status.
///
/// Defective activities are never emitted silently; each drop is recorded
/// in `defects` and degrades the status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub activities: Vec<Activity>,
    pub status: ParseStatus,
    pub defects: Vec<String>,
}

impl ParseOutcome {
    /// Outcome for a document the handler could not classify.
    pub fn unrecognized() -> Self {
        Self {
            activities: Vec::new(),
            status: ParseStatus::Unrecognized,
            defects: Vec::new(),
        }
    }

    /// Derive the status from extracted activities and recorded defects.
    pub fn from_parts(activities: Vec<Activity>, defects: Vec<String>) -> Self {
        let status = if !defects.is_empty() {
            ParseStatus::PartiallyParsed
        } else if activities.is_empty() {
            ParseStatus::Unrecognized
        } else {
            ParseStatus::Parsed
        };
        Self {
            activities,
            status,
            defects,
        }
    }
}
