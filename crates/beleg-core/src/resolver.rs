//! Implementation resolution: which handler owns a document.

use tracing::debug;

use crate::brokers::Broker;
use crate::error::ResolveError;
use crate::models::{Document, ParseOutcome};

/// Immutable handler table, built once at process start and shared by
/// reference afterwards. No registration happens after construction.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    brokers: Vec<Broker>,
}

impl HandlerRegistry {
    /// Registry over the full built-in catalog.
    pub fn standard() -> Self {
        Self::with_brokers(Broker::ALL.to_vec())
    }

    /// Registry over a custom subset, mainly for tests.
    pub fn with_brokers(brokers: Vec<Broker>) -> Self {
        Self { brokers }
    }

    pub fn brokers(&self) -> &[Broker] {
        &self.brokers
    }

    /// Every handler claiming the document.
    ///
    /// Detection is page-local: predicates run against the first page
    /// only. The full matching set is surfaced so callers can tell
    /// ambiguity (a catalog defect) from non-recognition.
    pub fn matches(&self, document: &Document) -> Vec<Broker> {
        let Some(first_page) = document.first_page() else {
            return Vec::new();
        };
        self.brokers
            .iter()
            .copied()
            .filter(|broker| broker.can_parse_page(first_page, document.file_kind))
            .collect()
    }

    /// Resolve the single owning handler.
    pub fn resolve(&self, document: &Document) -> Result<Broker, ResolveError> {
        let matches = self.matches(document);
        match matches.len() {
            0 => Err(ResolveError::Unrecognized),
            1 => {
                debug!(broker = %matches[0], "resolved document");
                Ok(matches[0])
            }
            _ => Err(ResolveError::Ambiguous(matches)),
        }
    }

    /// Resolve and parse in one step.
    ///
    /// An unresolvable document yields an unrecognized outcome instead of
    /// an error so batch callers can keep going; ambiguity still surfaces
    /// as an error because it signals a catalog defect.
    pub fn parse(&self, document: &Document) -> Result<ParseOutcome, ResolveError> {
        match self.resolve(document) {
            Ok(broker) => Ok(broker.parse_pages(document)),
            Err(ResolveError::Unrecognized) => Ok(ParseOutcome::unrecognized()),
            Err(ambiguous) => Err(ambiguous),
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
