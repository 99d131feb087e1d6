/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Book metadata returned by an identifier lookup service.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata for one book, as returned by an ISBN lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct LookupRecord {
    pub title: String,
    /// Free text, e.g. "1965" or "August 1, 1965".
    pub publish_date: String,
    pub publisher_name: String,
    pub author_names: Vec<String>,
}
