/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendered citation pieces.
//!
//! A [`Segment`] carries the formatted output together with its plain text,
//! so punctuation can be decided on the words rather than on markup. Empty
//! segments absorb every affix applied to them, which is what lets templates
//! drop a missing field along with its punctuation.

use super::format::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    plain: String,
    output: String,
}

impl Segment {
    /// A segment holding a field value. Whitespace-only values are empty.
    pub fn text<F: OutputFormat>(fmt: &F, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::default();
        }
        Self {
            plain: value.to_string(),
            output: fmt.text(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn ends_sentence(&self) -> bool {
        self.plain.ends_with(['.', '?', '!'])
    }

    /// Add literal text around the segment (both plain and output).
    pub fn affix(self, prefix: &str, suffix: &str) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            plain: format!("{}{}{}", prefix, self.plain, suffix),
            output: format!("{}{}{}", prefix, self.output, suffix),
        }
    }

    pub fn prefix(self, prefix: &str) -> Self {
        self.affix(prefix, "")
    }

    /// Close the segment with a period unless it already ends a sentence.
    pub fn period(self) -> Self {
        if self.is_empty() || self.ends_sentence() {
            self
        } else {
            self.affix("", ".")
        }
    }

    pub fn parens(self) -> Self {
        self.affix("(", ")")
    }

    pub fn emph<F: OutputFormat>(self, fmt: &F) -> Self {
        self.markup(|output| fmt.emph(output))
    }

    /// Quote the segment. Apply [`Segment::period`] first to get `"Title."`.
    pub fn quote<F: OutputFormat>(self, fmt: &F) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            plain: format!("\"{}\"", self.plain),
            output: fmt.quote(self.output),
        }
    }

    pub fn link<F: OutputFormat>(self, fmt: &F, url: &str) -> Self {
        self.markup(|output| fmt.link(url, output))
    }

    fn markup(self, wrap: impl FnOnce(String) -> String) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            output: wrap(self.output),
            plain: self.plain,
        }
    }

    /// Join the non-empty segments with a delimiter.
    pub fn join(segments: impl IntoIterator<Item = Segment>, delimiter: &str) -> Self {
        let parts: Vec<Segment> = segments.into_iter().filter(|s| !s.is_empty()).collect();
        Self {
            plain: parts
                .iter()
                .map(|s| s.plain.as_str())
                .collect::<Vec<_>>()
                .join(delimiter),
            output: parts
                .iter()
                .map(|s| s.output.as_str())
                .collect::<Vec<_>>()
                .join(delimiter),
        }
    }
}

/// Collapse every run of whitespace to one space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
