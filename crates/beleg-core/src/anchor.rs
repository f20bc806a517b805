//! Anchor-relative text location over page-segmented documents.
//!
//! Broker layouts are handled by locating a fixed label (the anchor) and
//! reading the data value next to it. Extraction from PDFs leaves two
//! placements in the wild: value on the same line after the label, or
//! wrapped onto the following line. The utilities here check both.

use crate::models::Page;

/// Position of a matched line within a page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub page: usize,
    pub line: usize,
}

/// Find the first line containing `label`, searching pages in order.
pub fn find_line<'a>(pages: &'a [Page], label: &str) -> Option<(Anchor, &'a str)> {
    for (page_idx, page) in pages.iter().enumerate() {
        for (line_idx, line) in page.lines.iter().enumerate() {
            if line.contains(label) {
                return Some((
                    Anchor {
                        page: page_idx,
                        line: line_idx,
                    },
                    line.as_str(),
                ));
            }
        }
    }
    None
}

/// First line whose trimmed text starts with `prefix`.
///
/// Table layouts put labels at the start of the line; matching on the
/// prefix keeps "KURS" from anchoring inside "KURSWERT" or company names
/// containing the label text.
pub fn find_line_starting<'a>(pages: &'a [Page], prefix: &str) -> Option<(Anchor, &'a str)> {
    find_lines_starting(pages, prefix).into_iter().next()
}

/// All lines whose trimmed text starts with `prefix`, in document order.
pub fn find_lines_starting<'a>(pages: &'a [Page], prefix: &str) -> Vec<(Anchor, &'a str)> {
    let mut hits = Vec::new();
    for (page_idx, page) in pages.iter().enumerate() {
        for (line_idx, line) in page.lines.iter().enumerate() {
            if line.trim_start().starts_with(prefix) {
                hits.push((
                    Anchor {
                        page: page_idx,
                        line: line_idx,
                    },
                    line.as_str(),
                ));
            }
        }
    }
    hits
}

/// Line at a fixed offset below the anchor, crossing page boundaries.
pub fn line_below<'a>(pages: &'a [Page], at: Anchor, offset: usize) -> Option<&'a str> {
    let mut remaining = offset;
    let mut page_idx = at.page;
    let mut line_idx = at.line;

    while remaining > 0 {
        line_idx += 1;
        while line_idx >= pages.get(page_idx)?.lines.len() {
            page_idx += 1;
            line_idx = 0;
            pages.get(page_idx)?;
        }
        remaining -= 1;
    }

    pages
        .get(page_idx)
        .and_then(|p| p.lines.get(line_idx))
        .map(|l| l.as_str())
}

/// Line directly above the anchor, within the same page.
pub fn line_above<'a>(pages: &'a [Page], at: Anchor) -> Option<&'a str> {
    if at.line == 0 {
        return None;
    }
    pages
        .get(at.page)
        .and_then(|p| p.lines.get(at.line - 1))
        .map(|l| l.as_str())
}

/// Trimmed remainder of `line` after the first occurrence of `label`.
///
/// Returns `None` when the label is absent or nothing but whitespace and
/// separator punctuation follows it.
pub fn value_after<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let start = line.find(label)? + label.len();
    let value = line[start..].trim_start_matches([' ', '\t', ':']).trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Locate `label` and return the adjacent value text.
///
/// Tries the same-line remainder first; when the label ends its line (the
/// wrapped-label case) the next non-empty line is taken instead.
pub fn value_near<'a>(pages: &'a [Page], label: &str) -> Option<&'a str> {
    let (at, line) = find_line(pages, label)?;
    if let Some(value) = value_after(line, label) {
        return Some(value);
    }

    for offset in 1..=2 {
        if let Some(next) = line_below(pages, at, offset) {
            let next = next.trim();
            if !next.is_empty() {
                return Some(next);
            }
        }
    }
    None
}
