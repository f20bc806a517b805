//! Broker document interpretation engine.
//!
//! This crate consumes page-segmented text extracted from broker-issued
//! documents (trade confirmations, dividend advices) and provides:
//! - Template resolution: deciding which broker handler owns a document
//! - Per-broker extraction pipelines turning anchor-relative text fragments
//!   into typed fields (German-locale numbers and dates, ISIN/WKN identity,
//!   fees, taxes, foreign-currency reconciliation)
//! - Normalized, validated `Activity` records for downstream consumers
//!
//! Converting a binary document into page text is the caller's concern;
//! the engine never reads raw document bytes.

pub mod anchor;
pub mod brokers;
pub mod error;
pub mod extract;
pub mod models;
pub mod resolver;

pub use brokers::Broker;
pub use error::{BelegError, ExtractionError, InvariantViolation, ResolveError, Result};
pub use models::{
    Activity, ActivityType, Document, FileKind, Page, ParseOutcome, ParseStatus,
};
pub use resolver::HandlerRegistry;
