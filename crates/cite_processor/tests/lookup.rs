/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::{CitationRecord, Kind, LookupRecord};
use cite_processor::{
    merge_lookup, Applied, IsbnLookup, LookupError, LookupSequencer, MapLookup,
};

fn dune() -> LookupRecord {
    LookupRecord {
        title: "Dune".to_string(),
        publish_date: "August 1965".to_string(),
        publisher_name: "Chilton Books".to_string(),
        author_names: vec!["Frank Herbert".to_string()],
    }
}

struct FailingLookup;

impl IsbnLookup for FailingLookup {
    fn lookup(&self, _isbn13: &str) -> Result<Option<LookupRecord>, LookupError> {
        Err(LookupError::Network("connection refused".to_string()))
    }
}

#[test]
fn test_merge_fills_book_fields_only() {
    let record = CitationRecord {
        title: "Web title".to_string(),
        pages: "3-9".to_string(),
        ..Default::default()
    };
    let merged = merge_lookup(&record, "9780306406157", &dune());
    assert_eq!(merged.book_title, "Dune");
    assert_eq!(merged.year, "1965");
    assert_eq!(merged.publisher, "Chilton Books");
    assert_eq!(merged.book_author, "Frank Herbert");
    assert_eq!(merged.isbn, "9780306406157");
    assert_eq!(merged.title, "Web title");
    assert_eq!(merged.pages, "3-9");
    // The input is not modified.
    assert_eq!(record.book_title, "");
}

#[test]
fn test_merge_keeps_fields_the_lookup_lacks() {
    let record = make_book();
    let sparse = LookupRecord {
        author_names: vec!["Frank Herbert".to_string(), "  ".to_string(), "Brian Herbert".to_string()],
        ..Default::default()
    };
    let merged = merge_lookup(&record, "9780306406157", &sparse);
    assert_eq!(merged.book_title, "dune");
    assert_eq!(merged.year, "1965");
    assert_eq!(merged.publisher, "Chilton Books");
    assert_eq!(merged.book_author, "Frank Herbert and Brian Herbert");
}

#[test]
fn test_resolve_merges_current_request() {
    let mut table = MapLookup::new();
    assert!(table.insert("0-306-40615-2", dune()));

    let mut sequencer = LookupSequencer::new();
    let mut record = CitationRecord::default();
    let applied = sequencer.resolve(&table, "0306406152", &mut record);
    assert_eq!(applied, Applied::Merged);
    assert_eq!(record.kind(), Kind::Book);
    assert_eq!(record.isbn, "9780306406157");
}

#[test]
fn test_resolve_not_found_and_invalid() {
    let table = MapLookup::new();
    let mut sequencer = LookupSequencer::new();
    let mut record = make_web();

    assert_eq!(
        sequencer.resolve(&table, "9780306406157", &mut record),
        Applied::NotFound
    );
    assert_eq!(sequencer.resolve(&table, "garbage", &mut record), Applied::Invalid);
    assert_eq!(record, make_web());
}

#[test]
fn test_failure_is_reported_and_leaves_record_alone() {
    let mut sequencer = LookupSequencer::new();
    let mut record = make_book();
    let applied = sequencer.resolve(&FailingLookup, "0306406152", &mut record);
    assert_eq!(
        applied,
        Applied::Failed("lookup failed: connection refused".to_string())
    );
    assert_eq!(record, make_book());
}

#[test]
fn test_stale_response_is_discarded() {
    let mut sequencer = LookupSequencer::new();
    let mut record = CitationRecord::default();

    let old = sequencer.issue();
    // The user edits the ISBN again before the first answer arrives.
    let new = sequencer.issue();
    assert!(old < new);
    assert!(!sequencer.is_current(old));

    record.book_title = "Typed by the user".to_string();
    let applied = sequencer.apply(old, "9780306406157", Ok(Some(dune())), &mut record);
    assert_eq!(applied, Applied::Stale);
    assert_eq!(record.book_title, "Typed by the user");

    let applied = sequencer.apply(new, "9780306406157", Ok(Some(dune())), &mut record);
    assert_eq!(applied, Applied::Merged);
    assert_eq!(record.book_title, "Dune");
}

#[test]
fn test_invalid_input_still_supersedes() {
    let mut sequencer = LookupSequencer::new();
    let pending = sequencer.issue();
    let mut record = CitationRecord::default();
    assert_eq!(
        sequencer.resolve(&MapLookup::new(), "12", &mut record),
        Applied::Invalid
    );
    assert_eq!(
        sequencer.apply(pending, "9780306406157", Ok(Some(dune())), &mut record),
        Applied::Stale
    );
}

#[test]
fn test_map_lookup_from_json() {
    let json = br#"{
        "978-0-306-40615-7": {"title": "Dune", "publishDate": "1965", "publisherName": "Chilton", "authorNames": ["Frank Herbert"]},
        "bogus": {"title": "Nothing"}
    }"#;
    let table = MapLookup::from_json(json).unwrap();
    assert_eq!(table.len(), 1);
    let found = table.lookup("9780306406157").unwrap().unwrap();
    assert_eq!(found.publisher_name, "Chilton");
    assert!(MapLookup::from_json(b"[1, 2]").is_err());
}
