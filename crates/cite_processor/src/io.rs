/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use cite_core::CitationRecord;

use crate::lookup::MapLookup;
use crate::ProcessorError;

/// Load a citation record from a file.
/// Supports JSON (`.json`) and YAML (anything else).
pub fn load_record(path: &Path) -> Result<CitationRecord, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    parse_record(&bytes, ext)
}

/// Parse a citation record from bytes, choosing the format by extension.
pub fn parse_record(bytes: &[u8], ext: &str) -> Result<CitationRecord, ProcessorError> {
    match ext {
        "json" => serde_json::from_slice::<CitationRecord>(bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(bytes);
            if content.trim().is_empty() {
                return Ok(CitationRecord::default());
            }
            serde_yaml::from_str::<CitationRecord>(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load an offline ISBN lookup table (a JSON object keyed by ISBN).
pub fn load_lookup_table(path: &Path) -> Result<MapLookup, ProcessorError> {
    let bytes = fs::read(path)?;
    MapLookup::from_json(&bytes)
}
