/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Works-cited list entries.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Style;

/// Upper bound on the number of entries a works-cited list keeps.
pub const MAX_ENTRIES: usize = 500;

/// A formatted citation saved to the works-cited list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct BibEntry {
    pub text: String,
    /// Milliseconds since the Unix epoch.
    #[serde(alias = "ts")]
    pub timestamp: i64,
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_browser_list_format() {
        let json = r#"[{"text":"Doe, Jane. \"Example.\"","ts":1685577600000,"url":"https://x.com","style":"MLA"}]"#;
        let entries: Vec<BibEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, 1685577600000);
        assert_eq!(entries[0].style, Style::Mla);
        assert_eq!(entries[0].url.as_deref(), Some("https://x.com"));
    }
}
