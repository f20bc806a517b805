//! Broker handler catalog.
//!
//! One handler per supported institution, modeled as a closed enum behind
//! a shared detect/parse surface. Detection predicates match on a small
//! set of institution-identifying literals and must never overlap: a
//! false positive breaks the resolver's uniqueness guarantee, a false
//! negative merely leaves a format unsupported.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::{Activity, ActivityType, Document, FileKind, Page, ParseOutcome};

pub mod comdirect;
pub mod consorsbank;
pub mod dkb;
pub mod ing;

/// Supported institutions, one variant per document template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Broker {
    Consorsbank,
    Comdirect,
    Dkb,
    Ing,
}

impl Broker {
    /// The full handler catalog, in registration order.
    pub const ALL: [Broker; 4] = [
        Broker::Consorsbank,
        Broker::Comdirect,
        Broker::Dkb,
        Broker::Ing,
    ];

    /// Stable identifier used in serialized activities.
    pub fn id(&self) -> &'static str {
        match self {
            Broker::Consorsbank => "consorsbank",
            Broker::Comdirect => "comdirect",
            Broker::Dkb => "dkb",
            Broker::Ing => "ing",
        }
    }

    /// Cheap, page-local detection predicate.
    pub fn can_parse_page(&self, page: &Page, file_kind: FileKind) -> bool {
        match self {
            Broker::Consorsbank => consorsbank::can_parse_page(page, file_kind),
            Broker::Comdirect => comdirect::can_parse_page(page, file_kind),
            Broker::Dkb => dkb::can_parse_page(page, file_kind),
            Broker::Ing => ing::can_parse_page(page, file_kind),
        }
    }

    /// Walk the document's pages and extract validated activities.
    pub fn parse_pages(&self, document: &Document) -> ParseOutcome {
        match self {
            Broker::Consorsbank => {
                parse_segments(document, *self, consorsbank::classify, consorsbank::parse)
            }
            Broker::Comdirect => {
                parse_segments(document, *self, comdirect::classify, comdirect::parse)
            }
            Broker::Dkb => parse_segments(document, *self, dkb::classify, dkb::parse),
            Broker::Ing => parse_segments(document, *self, ing::classify, ing::parse),
        }
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Per-transaction parse routine of a handler: a page segment plus the
/// detected category in, one activity draft out.
type SegmentParser = fn(&[Page], ActivityType) -> Result<Activity, ExtractionError>;

/// Shared page walker.
///
/// Each page carrying a transaction marker opens a segment running up to
/// the next marker (statements batch several confirmations into one file,
/// and a single confirmation may wrap onto follow-up pages). Every
/// segment yields at most one activity; extraction and invariant failures
/// are recorded as defects without aborting sibling segments.
fn parse_segments(
    document: &Document,
    broker: Broker,
    classify: fn(&Page) -> Option<ActivityType>,
    parse: SegmentParser,
) -> ParseOutcome {
    let markers: Vec<(usize, ActivityType)> = document
        .pages
        .iter()
        .enumerate()
        .filter_map(|(idx, page)| classify(page).map(|t| (idx, t)))
        .collect();

    if markers.is_empty() {
        debug!(broker = %broker, "no transaction marker found");
        return ParseOutcome::unrecognized();
    }

    let mut activities = Vec::new();
    let mut defects = Vec::new();

    for (pos, &(start, activity_type)) in markers.iter().enumerate() {
        let end = markers
            .get(pos + 1)
            .map(|&(next, _)| next)
            .unwrap_or(document.pages.len());
        let segment = &document.pages[start..end];

        debug!(broker = %broker, ?activity_type, pages = segment.len(), "parsing segment");

        match parse(segment, activity_type) {
            Ok(activity) => match activity.validate() {
                Ok(()) => activities.push(activity),
                Err(violation) => {
                    warn!(broker = %broker, %violation, "dropping invalid activity");
                    defects.push(violation.to_string());
                }
            },
            Err(defect) => {
                warn!(broker = %broker, %defect, "segment extraction failed");
                defects.push(defect.to_string());
            }
        }
    }

    ParseOutcome::from_parts(activities, defects)
}
