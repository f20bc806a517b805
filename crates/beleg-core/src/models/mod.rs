//! Data model: documents in, activities out.

pub mod activity;
pub mod document;

pub use activity::{Activity, ActivityType, ParseOutcome, ParseStatus};
pub use document::{Document, FileKind, Page};
