/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Works-cited list storage.
//!
//! Entries are kept newest first and truncated to a fixed capacity on every
//! write. The store owns persistence; the processor only formats the text.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cite_core::{BibEntry, Style, MAX_ENTRIES};
use tracing::{debug, warn};

use crate::ProcessorError;

/// An append-only, newest-first list of saved citations.
pub trait BibliographyStore {
    /// Insert an entry at the front of the list.
    fn add(&mut self, entry: BibEntry) -> Result<(), ProcessorError>;

    /// Remove every entry.
    fn clear(&mut self) -> Result<(), ProcessorError>;

    /// All entries, newest first.
    fn list(&self) -> Result<Vec<BibEntry>, ProcessorError>;
}

/// Build an entry stamped with the current time.
pub fn new_entry(text: impl Into<String>, style: Style, url: Option<&str>) -> BibEntry {
    BibEntry {
        text: text.into(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        style,
        url: url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string),
    }
}

/// Plain-text export: one citation per line, newest first.
pub fn export_text(entries: &[BibEntry]) -> String {
    entries
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_front(entries: &mut Vec<BibEntry>, entry: BibEntry, capacity: usize) {
    entries.insert(0, entry);
    if entries.len() > capacity {
        debug!(
            dropped = entries.len() - capacity,
            capacity, "truncating works-cited list"
        );
        entries.truncate(capacity);
    }
}

fn clamp_capacity(capacity: usize) -> usize {
    capacity.clamp(1, MAX_ENTRIES)
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Vec<BibEntry>,
    capacity: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capacity is clamped to `1..=MAX_ENTRIES`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: clamp_capacity(capacity),
        }
    }
}

impl BibliographyStore for MemoryStore {
    fn add(&mut self, entry: BibEntry) -> Result<(), ProcessorError> {
        push_front(&mut self.entries, entry, self.capacity);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ProcessorError> {
        self.entries.clear();
        Ok(())
    }

    fn list(&self) -> Result<Vec<BibEntry>, ProcessorError> {
        Ok(self.entries.clone())
    }
}

/// Store backed by a JSON array on disk.
///
/// A missing file or one holding invalid JSON is treated as an empty list,
/// so a corrupt file never blocks adding new citations. Other I/O failures
/// are returned as errors.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    capacity: usize,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_capacity(path, MAX_ENTRIES)
    }

    pub fn with_capacity(path: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity: clamp_capacity(capacity),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<BibEntry>, ProcessorError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice::<Vec<BibEntry>>(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable works-cited file");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[BibEntry]) -> Result<(), ProcessorError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let keep = &entries[..entries.len().min(self.capacity)];
        let json = serde_json::to_string_pretty(keep)
            .map_err(|e| ProcessorError::Store(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl BibliographyStore for JsonFileStore {
    fn add(&mut self, entry: BibEntry) -> Result<(), ProcessorError> {
        let mut entries = self.load()?;
        push_front(&mut entries, entry, self.capacity);
        self.save(&entries)
    }

    fn clear(&mut self) -> Result<(), ProcessorError> {
        self.save(&[])
    }

    fn list(&self) -> Result<Vec<BibEntry>, ProcessorError> {
        let mut entries = self.load()?;
        entries.truncate(self.capacity);
        Ok(entries)
    }
}
