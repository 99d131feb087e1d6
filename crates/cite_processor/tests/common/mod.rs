/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use cite_core::CitationRecord;

// --- Helper Functions for Test Data Construction ---

/// A fully populated web page record.
pub fn make_web() -> CitationRecord {
    CitationRecord {
        author: "Jane Doe".to_string(),
        title: "Example".to_string(),
        site: "Site".to_string(),
        date: "2023-05-14".to_string(),
        url: "https://x.com".to_string(),
        accessed: "2023-06-01".to_string(),
        ..Default::default()
    }
}

/// A whole book with edition and place of publication.
pub fn make_book() -> CitationRecord {
    CitationRecord {
        book_author: "Frank Herbert".to_string(),
        book_title: "dune".to_string(),
        publisher: "Chilton Books".to_string(),
        year: "1965".to_string(),
        edition: "2".to_string(),
        city: "Philadelphia".to_string(),
        ..Default::default()
    }
}

/// A chapter in an edited collection with two authors.
pub fn make_chapter() -> CitationRecord {
    CitationRecord {
        book_author: "Jane Doe and John Smith".to_string(),
        book_title: "the collected essays".to_string(),
        chapter_title: "on method".to_string(),
        pages: "12-34".to_string(),
        publisher: "Penguin".to_string(),
        year: "2020".to_string(),
        edition: "3".to_string(),
        city: "London".to_string(),
        ..Default::default()
    }
}

/// True if the string has no doubled spaces, empty list slots or stray edges.
pub fn is_clean(s: &str) -> bool {
    !s.contains("  ")
        && !s.contains(", ,")
        && !s.contains(",,")
        && !s.contains("..")
        && !s.contains(" .")
        && !s.contains(" ,")
        && !s.contains("()")
        && s.trim() == s
}
