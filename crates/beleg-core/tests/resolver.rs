//! Resolver behavior over the full fixture catalog.

mod common;

use pretty_assertions::assert_eq;

use beleg_core::{Document, FileKind, HandlerRegistry, ParseStatus, ResolveError};

#[test]
fn every_fixture_is_claimed_by_exactly_its_own_handler() {
    let registry = HandlerRegistry::standard();
    for (expected, document) in common::catalog() {
        assert_eq!(
            registry.matches(&document),
            vec![expected],
            "fixture tagged {expected} must be claimed by that handler alone"
        );
        assert_eq!(registry.resolve(&document), Ok(expected));
    }
}

#[test]
fn every_catalog_document_parses_cleanly() {
    let registry = HandlerRegistry::standard();
    for (expected, document) in common::catalog() {
        let outcome = registry.parse(&document).unwrap();
        assert_eq!(
            outcome.status,
            ParseStatus::Parsed,
            "fixture tagged {expected}: {:?}",
            outcome.defects
        );
        assert!(!outcome.activities.is_empty());
        for activity in &outcome.activities {
            assert_eq!(activity.broker, expected);
            assert_eq!(activity.validate(), Ok(()));
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    let registry = HandlerRegistry::standard();
    for (_, document) in common::catalog() {
        let first = registry.parse(&document).unwrap();
        let second = registry.parse(&document).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn unknown_letterhead_degrades_to_an_unrecognized_outcome() {
    let document = Document::pdf_page(&["Musterbank AG", "Wertpapierabrechnung"]);
    let registry = HandlerRegistry::standard();

    assert_eq!(registry.resolve(&document), Err(ResolveError::Unrecognized));
    let outcome = registry.parse(&document).unwrap();
    assert_eq!(outcome.status, ParseStatus::Unrecognized);
    assert!(outcome.activities.is_empty());
    assert!(outcome.defects.is_empty());
}

#[test]
fn known_letterhead_without_transaction_marker_is_unrecognized() {
    let document = Document::pdf_page(&["CONSORSBANK", "DEPOTAUSZUG PER 31.12.2020"]);
    let outcome = HandlerRegistry::standard().parse(&document).unwrap();
    assert_eq!(outcome.status, ParseStatus::Unrecognized);
}

#[test]
fn csv_documents_are_not_claimed_by_page_layout_handlers() {
    let pages = common::consorsbank_buy().pages;
    let document = Document::new(FileKind::Csv, pages);
    assert!(HandlerRegistry::standard().matches(&document).is_empty());
}
