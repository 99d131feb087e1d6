/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Cite Processor
//!
//! Turns raw bibliographic fields into formatted MLA, APA and Chicago
//! citations for web pages, books and book chapters, plus short in-text
//! references and completeness advice.
//!
//! # Example
//!
//! ```rust
//! use cite_core::{CitationRecord, Style};
//! use cite_processor::Processor;
//!
//! let record = CitationRecord {
//!     author: "Jane Doe".to_string(),
//!     title: "Example".to_string(),
//!     site: "Site".to_string(),
//!     date: "2023-05-14".to_string(),
//!     url: "https://x.com".to_string(),
//!     accessed: "2023-06-01".to_string(),
//!     ..Default::default()
//! };
//!
//! let processor = Processor::new(Style::Mla);
//! assert_eq!(
//!     processor.format(&record),
//!     "Doe, Jane. \"Example.\" Site, 14 May 2023, https://x.com. Accessed 1 Jun 2023."
//! );
//! assert_eq!(processor.in_text(&record, Some("12")), "(Doe 12)");
//! ```

pub mod advisor;
pub mod error;
pub mod in_text;
pub mod io;
pub mod lookup;
pub mod processor;
pub mod render;
pub mod store;
pub mod values;

pub use advisor::{advise, Advice, LOOKS_COMPLETE};
pub use error::{LookupError, ProcessorError};
pub use in_text::in_text;
pub use lookup::{merge_lookup, Applied, IsbnLookup, LookupSequencer, MapLookup, RequestId};
pub use processor::{Formatted, Processor};
pub use render::{compose, compose_kind, html::Html, plain::PlainText, OutputFormat};
pub use store::{export_text, new_entry, BibliographyStore, JsonFileStore, MemoryStore};

// Re-export the data model for convenience
pub use cite_core::{BibEntry, CitationRecord, Kind, LookupRecord, Style};
