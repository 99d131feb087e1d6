/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::CitationRecord;
use cite_processor::in_text;

#[test]
fn test_in_text_with_page() {
    assert_eq!(in_text(&make_web(), Some("12")), "(Doe 12)");
}

#[test]
fn test_in_text_without_page() {
    assert_eq!(in_text(&make_web(), None), "(Doe)");
    assert_eq!(in_text(&make_web(), Some("   ")), "(Doe)");
}

#[test]
fn test_in_text_inverted_author() {
    let record = CitationRecord {
        author: "Doe, Jane and Smith, John".to_string(),
        ..Default::default()
    };
    assert_eq!(in_text(&record, Some("4")), "(Doe 4)");
}

#[test]
fn test_in_text_page_defaults_to_first_page() {
    assert_eq!(in_text(&make_chapter(), None), "(Doe 12)");
    assert_eq!(in_text(&make_chapter(), Some("30")), "(Doe 30)");
}

#[test]
fn test_in_text_prefers_book_author_for_books() {
    let record = CitationRecord {
        author: "Web Writer".to_string(),
        ..make_book()
    };
    assert_eq!(in_text(&record, None), "(Herbert)");
}

#[test]
fn test_in_text_without_author() {
    assert_eq!(in_text(&CitationRecord::default(), None), "(\"Title\")");
    assert_eq!(
        in_text(&CitationRecord::default(), Some("3")),
        "(\"Title\" 3)"
    );
}

#[test]
fn test_in_text_organization() {
    let record = CitationRecord {
        author: "UNESCO".to_string(),
        ..Default::default()
    };
    assert_eq!(in_text(&record, None), "(UNESCO)");
}

#[test]
fn test_in_text_particle_surname() {
    let record = CitationRecord {
        author: "Van Gogh, Vincent Willem".to_string(),
        title: "Letters".to_string(),
        ..Default::default()
    };
    assert_eq!(in_text(&record, Some("5")), "(Van Gogh 5)");
}
