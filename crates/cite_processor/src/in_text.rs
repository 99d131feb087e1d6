/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Parenthetical in-text references such as `(Doe 12)`.

use cite_core::CitationRecord;

use crate::values::{first_family_name, first_page};

/// Placeholder used when the record has no author.
pub const NO_AUTHOR: &str = "\"Title\"";

/// Render the short in-text form for a record.
///
/// An explicit `page` wins; otherwise the first number in the record's pages
/// field is used, if any.
pub fn in_text(record: &CitationRecord, page: Option<&str>) -> String {
    let kind = record.kind();
    let name =
        first_family_name(record.author_for(kind)).unwrap_or_else(|| NO_AUTHOR.to_string());

    let page = page
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .or_else(|| first_page(&record.pages));

    match page {
        Some(page) => format!("({} {})", name, page),
        None => format!("({})", name),
    }
}
