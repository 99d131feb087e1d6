/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation assembly.
//!
//! Each (style, kind) pair maps to one template function. Templates return a
//! list of [`Segment`]s; empty segments are dropped and the rest are joined
//! with single spaces.

pub mod book;
pub mod component;
pub mod format;
pub mod html;
pub mod plain;
pub mod web;

pub use component::{collapse_whitespace, Segment};
pub use format::OutputFormat;

use cite_core::{CitationRecord, Kind, Style};
use tracing::debug;

/// Look up the template for a style and kind.
fn segments<F: OutputFormat>(
    fmt: &F,
    record: &CitationRecord,
    style: Style,
    kind: Kind,
) -> Vec<Segment> {
    match (style, kind) {
        (Style::Mla, Kind::Web) => web::mla(fmt, record),
        (Style::Apa, Kind::Web) => web::apa(fmt, record),
        (Style::Chicago, Kind::Web) => web::chicago(fmt, record),
        (Style::Mla, _) => book::mla(fmt, record, kind),
        (Style::Apa, _) => book::apa(fmt, record, kind),
        (Style::Chicago, _) => book::chicago(fmt, record, kind),
    }
}

/// Compose a citation for an already resolved kind.
pub fn compose_kind<F: OutputFormat>(
    fmt: &F,
    record: &CitationRecord,
    style: Style,
    kind: Kind,
) -> String {
    let record = record.normalized();
    debug!(style = %style, kind = kind.as_str(), "composing citation");
    let body = Segment::join(segments(fmt, &record, style, kind), " ");
    collapse_whitespace(&fmt.finish(body.into_output()))
}

/// Compose a citation, resolving the kind from the record.
pub fn compose<F: OutputFormat>(fmt: &F, record: &CitationRecord, style: Style) -> String {
    compose_kind(fmt, record, style, record.kind())
}
