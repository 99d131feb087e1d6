/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Completeness checks.
//!
//! The advisor never blocks formatting; it only lists what a careful
//! researcher would still want to fill in.

use std::fmt;
use std::sync::LazyLock;

use cite_core::{CitationRecord, Kind};
use regex::Regex;
use serde::Serialize;

use crate::values::normalize_isbn;

static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("scheme pattern is valid"));

static FOUR_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("year pattern is valid"));

/// Shown when nothing is missing.
pub const LOOKS_COMPLETE: &str = "Looks complete. Nice!";

/// Ordered list of advisory warnings for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub warnings: Vec<String>,
}

impl Advice {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.warnings.is_empty() {
            return f.write_str(LOOKS_COMPLETE);
        }
        let lines: Vec<String> = self.warnings.iter().map(|w| format!("• {}", w)).collect();
        f.write_str(&lines.join("\n"))
    }
}

fn missing(value: &str) -> bool {
    value.trim().is_empty()
}

fn web_warnings(record: &CitationRecord) -> Vec<String> {
    let mut issues = Vec::new();
    if missing(&record.author) {
        issues.push("Missing author (use organization if no person listed).".to_string());
    }
    if missing(&record.title) {
        issues.push("Missing title (use page/article title).".to_string());
    }
    if missing(&record.site) {
        issues.push("Missing site/publisher name.".to_string());
    }
    if missing(&record.date) {
        issues.push("Missing publish date (try to find posted/updated date).".to_string());
    }
    let url = record.url.trim();
    if !url.is_empty() && !HTTP_SCHEME.is_match(url) {
        issues.push("URL should start with https://".to_string());
    }
    issues
}

fn book_warnings(record: &CitationRecord, kind: Kind) -> Vec<String> {
    let mut issues = Vec::new();
    if missing(record.author_for(kind)) {
        issues.push("Missing book author (use editor or organization if none listed).".to_string());
    }
    if missing(record.book_title_or_title()) {
        issues.push("Missing book title.".to_string());
    }
    if missing(&record.publisher) {
        issues.push("Missing publisher name.".to_string());
    }
    let year = record.year.trim();
    if year.is_empty() {
        issues.push("Missing publication year.".to_string());
    } else if !FOUR_DIGITS.is_match(year) {
        issues.push("Year should be four digits.".to_string());
    }
    if !missing(&record.isbn) && normalize_isbn(&record.isbn).is_none() {
        issues.push("ISBN doesn't look valid (expected 10 or 13 digits).".to_string());
    }
    issues
}

/// Check a record against the fixed checklist for its kind.
pub fn advise(record: &CitationRecord, kind: Kind) -> Advice {
    let warnings = match kind {
        Kind::Web => web_warnings(record),
        Kind::Book | Kind::Chapter => book_warnings(record, kind),
    };
    Advice { warnings }
}
