//! CLI subcommands.

pub mod detect;
pub mod parse;

use std::fs;
use std::path::Path;

use beleg_core::Document;

/// Load a page-segmented document from a JSON file
/// (`{"fileKind": "pdf", "pages": [["line", ...], ...]}`).
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    if !path.exists() {
        anyhow::bail!("input file not found: {}", path.display());
    }
    let raw = fs::read_to_string(path)?;
    let document: Document = serde_json::from_str(&raw)?;
    Ok(document)
}
