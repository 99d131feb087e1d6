/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation styles.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A citation formatting convention.
///
/// The style selects both the author joining rule and the per-kind template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Style {
    /// MLA 9th edition: full names, "and", title case, quoted part titles.
    #[default]
    #[serde(rename = "MLA", alias = "mla")]
    Mla,
    /// APA 7th edition: initials, ampersand, sentence case, parenthesized year.
    #[serde(rename = "APA", alias = "apa")]
    Apa,
    /// Chicago 17th edition, bibliography form.
    #[serde(rename = "Chicago", alias = "chicago")]
    Chicago,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Mla, Style::Apa, Style::Chicago];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Mla => "MLA",
            Style::Apa => "APA",
            Style::Chicago => "Chicago",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized style name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(pub String);

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown citation style '{}' (expected MLA, APA or Chicago)",
            self.0
        )
    }
}

impl std::error::Error for ParseStyleError {}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mla" => Ok(Style::Mla),
            "apa" => Ok(Style::Apa),
            "chicago" => Ok(Style::Chicago),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_case_insensitive() {
        assert_eq!("apa".parse::<Style>().unwrap(), Style::Apa);
        assert_eq!(" Chicago ".parse::<Style>().unwrap(), Style::Chicago);
        assert_eq!("MLA".parse::<Style>().unwrap(), Style::Mla);
        assert!("harvard".parse::<Style>().is_err());
    }

    #[test]
    fn test_style_serde_names() {
        assert_eq!(serde_json::to_string(&Style::Apa).unwrap(), "\"APA\"");
        let style: Style = serde_json::from_str("\"chicago\"").unwrap();
        assert_eq!(style, Style::Chicago);
        assert_eq!(Style::default().to_string(), "MLA");
    }
}
