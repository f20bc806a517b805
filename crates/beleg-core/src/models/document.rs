//! Page-segmented document input.
//!
//! A `Document` is what the text-extraction collaborator delivers: one
//! ordered sequence of text lines per page, plus a tag naming the source
//! file format. The engine never mutates it.

use serde::{Deserialize, Serialize};

/// Source file format the text was extracted from.
///
/// Detection predicates use this to reject formats a handler does not
/// support (every shipped handler currently reads PDF extractions only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Csv,
}

/// One page of extracted text lines, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page {
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Build a page from string slices.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Whether any line on this page contains the literal.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

/// A broker document: ordered pages plus the source file kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub file_kind: FileKind,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(file_kind: FileKind, pages: Vec<Page>) -> Self {
        Self { file_kind, pages }
    }

    /// Single-page PDF document, the common case in tests and samples.
    pub fn pdf_page(lines: &[&str]) -> Self {
        Self::new(FileKind::Pdf, vec![Page::from_lines(lines)])
    }

    pub fn first_page(&self) -> Option<&Page> {
        self.pages.first()
    }
}
