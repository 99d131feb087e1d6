/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! ISBN lookup plumbing.
//!
//! Lookups are slow and the user keeps typing while one is in flight. Every
//! request gets a [`RequestId`] from a [`LookupSequencer`]; a response is
//! merged only if its id is still the latest issued, so a late answer for an
//! old ISBN can never overwrite fields edited since.

use std::sync::LazyLock;

use cite_core::{CitationRecord, LookupRecord};
use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, warn};

use crate::values::normalize_isbn;
use crate::{LookupError, ProcessorError};

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year pattern is valid"));

/// A service that resolves an ISBN-13 to book metadata.
pub trait IsbnLookup {
    /// `Ok(None)` means the service answered but does not know the ISBN.
    fn lookup(&self, isbn13: &str) -> Result<Option<LookupRecord>, LookupError>;
}

/// Offline lookup table keyed by ISBN-13.
#[derive(Debug, Clone, Default)]
pub struct MapLookup {
    records: IndexMap<String, LookupRecord>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Keys are normalized, so ISBN-10 keys are accepted;
    /// keys with no valid ISBN form are ignored.
    pub fn insert(&mut self, isbn: &str, record: LookupRecord) -> bool {
        match normalize_isbn(isbn) {
            Some(key) => {
                self.records.insert(key, record);
                true
            }
            None => {
                warn!(isbn, "skipping lookup entry with invalid ISBN");
                false
            }
        }
    }

    /// Load a JSON object mapping ISBNs to lookup records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProcessorError> {
        let raw: IndexMap<String, LookupRecord> = serde_json::from_slice(bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
        let mut table = Self::new();
        for (isbn, record) in raw {
            table.insert(&isbn, record);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IsbnLookup for MapLookup {
    fn lookup(&self, isbn13: &str) -> Result<Option<LookupRecord>, LookupError> {
        Ok(self.records.get(isbn13).cloned())
    }
}

/// Identifies one lookup request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What happened to a lookup response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Fields were merged into the record.
    Merged,
    /// The service does not know this ISBN; the record is unchanged.
    NotFound,
    /// The lookup failed; the message is suitable for showing to the user.
    Failed(String),
    /// A newer request has been issued; the response was discarded.
    Stale,
    /// The input has no valid ISBN-13 form; nothing was looked up.
    Invalid,
}

/// Issues monotonically increasing request ids and discards stale responses.
#[derive(Debug, Default)]
pub struct LookupSequencer {
    latest: u64,
}

impl LookupSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Merge a response into `record` if `id` is still the latest request.
    pub fn apply(
        &self,
        id: RequestId,
        isbn13: &str,
        outcome: Result<Option<LookupRecord>, LookupError>,
        record: &mut CitationRecord,
    ) -> Applied {
        if !self.is_current(id) {
            warn!(
                request = id.0,
                latest = self.latest,
                "discarding stale lookup response"
            );
            return Applied::Stale;
        }
        match outcome {
            Ok(Some(found)) => {
                *record = merge_lookup(record, isbn13, &found);
                debug!(isbn13, "merged lookup result");
                Applied::Merged
            }
            Ok(None) => Applied::NotFound,
            Err(e) => Applied::Failed(e.to_string()),
        }
    }

    /// Normalize `raw_isbn`, look it up and merge the result.
    ///
    /// A request id is issued even for invalid input, since any edit to the
    /// ISBN field supersedes earlier lookups.
    pub fn resolve<L: IsbnLookup>(
        &mut self,
        lookup: &L,
        raw_isbn: &str,
        record: &mut CitationRecord,
    ) -> Applied {
        let id = self.issue();
        let Some(isbn13) = normalize_isbn(raw_isbn) else {
            return Applied::Invalid;
        };
        let outcome = lookup.lookup(&isbn13);
        self.apply(id, &isbn13, outcome, record)
    }
}

/// Return a copy of `record` with the lookup fields filled in.
///
/// Only fields the lookup actually supplies are replaced.
pub fn merge_lookup(record: &CitationRecord, isbn13: &str, found: &LookupRecord) -> CitationRecord {
    let mut merged = record.clone();

    let title = found.title.trim();
    if !title.is_empty() {
        merged.book_title = title.to_string();
    }
    if let Some(year) = YEAR.find(&found.publish_date) {
        merged.year = year.as_str().to_string();
    }
    let publisher = found.publisher_name.trim();
    if !publisher.is_empty() {
        merged.publisher = publisher.to_string();
    }
    let authors: Vec<&str> = found
        .author_names
        .iter()
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .collect();
    if !authors.is_empty() {
        merged.book_author = authors.join(" and ");
    }
    merged.isbn = isbn13.to_string();

    merged
}
