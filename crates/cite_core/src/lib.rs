/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Core data model for the cite citation formatter.
//!
//! A [`CitationRecord`] holds the raw field values collected from a form or a
//! file. Everything downstream (name handling, dates, title casing, template
//! assembly) is a pure function of a record and a [`Style`].

pub mod bibliography;
pub mod lookup;
pub mod record;
pub mod style;

pub use bibliography::{BibEntry, MAX_ENTRIES};
pub use lookup::LookupRecord;
pub use record::{CitationRecord, Kind};
pub use style::{ParseStyleError, Style};
