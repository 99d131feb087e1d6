/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The processor facade: one style, many records.

use cite_core::{CitationRecord, Kind, Style};
use serde::Serialize;

use crate::advisor::{advise, Advice};
use crate::in_text::in_text;
use crate::render::{compose_kind, plain::PlainText, OutputFormat};

/// Everything the surrounding form needs to display for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formatted {
    pub kind: Kind,
    pub citation: String,
    pub advice: Advice,
}

/// Formats records in a fixed style.
///
/// Holds no state beyond the style, so the same record always yields the same
/// output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Processor {
    style: Style,
}

impl Processor {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Compose the plain-text citation.
    pub fn format(&self, record: &CitationRecord) -> String {
        self.format_with(&PlainText, record)
    }

    /// Compose the citation with a specific output format.
    pub fn format_with<F: OutputFormat>(&self, fmt: &F, record: &CitationRecord) -> String {
        compose_kind(fmt, record, self.style, record.kind())
    }

    /// Compose and check a record in one pass, resolving its kind once.
    pub fn process(&self, record: &CitationRecord) -> Formatted {
        let kind = record.kind();
        Formatted {
            kind,
            citation: compose_kind(&PlainText, record, self.style, kind),
            advice: advise(record, kind),
        }
    }

    /// The parenthetical in-text form. Style-independent.
    pub fn in_text(&self, record: &CitationRecord, page: Option<&str>) -> String {
        in_text(record, page)
    }
}
