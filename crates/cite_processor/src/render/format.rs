/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how formatted citation pieces become markup or text.
///
/// Punctuation and spacing are decided by the composer on the plain text;
/// implementations only decide how a piece is marked up.
pub trait OutputFormat: Default + Clone {
    /// Convert a raw string into the format's output, escaping as required.
    fn text(&self, s: &str) -> String;

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: String) -> String;

    /// Render content enclosed in quotation marks.
    fn quote(&self, content: String) -> String;

    /// Hyperlink the content to a URL.
    fn link(&self, url: &str, content: String) -> String;

    /// Convert the assembled output into the final result string.
    ///
    /// Called exactly once per citation.
    fn finish(&self, output: String) -> String {
        output
    }
}
