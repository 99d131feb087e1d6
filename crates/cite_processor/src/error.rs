/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Error types for the fallible edges of the processor.
//!
//! Formatting itself never fails; these cover files, stores and lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    ParseError(String, String),

    #[error("works-cited store error: {0}")]
    Store(String),
}

/// Failure reported by an identifier lookup service. Distinct from "not found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup failed: {0}")]
    Network(String),

    #[error("lookup returned unreadable data: {0}")]
    Parse(String),
}
