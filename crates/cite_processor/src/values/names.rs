/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author name parsing and list formatting.

use std::fmt;
use std::sync::LazyLock;

use cite_core::Style;
use regex::Regex;

static AUTHOR_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+and\s+|;|\|").expect("author separator pattern is valid")
});

const SUFFIXES: [&str; 7] = ["jr", "sr", "ii", "iii", "iv", "phd", "md"];

const PARTICLES: [&str; 9] = ["van", "von", "de", "la", "du", "der", "di", "da", "le"];

fn is_particle(word: &str) -> bool {
    PARTICLES.contains(&word.to_lowercase().as_str())
}

/// "Van Gogh, Vincent" or "de la Cruz, Maria": the family name leads with a
/// particle, so the comma inverts one name rather than separating two.
fn leads_with_particle(part: &str) -> bool {
    part.split_whitespace().next().is_some_and(is_particle)
}

fn is_suffix(part: &str) -> bool {
    let key = part.trim().trim_end_matches('.').replace('.', "");
    SUFFIXES.contains(&key.to_lowercase().as_str())
}

/// One contributor, either a person split into parts or a literal
/// (organization) name kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorName {
    Person {
        family: String,
        given: String,
        suffix: Option<String>,
    },
    Literal(String),
}

impl AuthorName {
    /// Parse a single name in either "Last, First" or "First Middle Last" order.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.contains(',') {
            return Self::parse_inverted(name);
        }

        let mut tokens: Vec<&str> = name.split_whitespace().collect();
        let suffix = match tokens.last() {
            Some(last) if tokens.len() > 2 && is_suffix(last) => tokens.pop().map(str::to_string),
            _ => None,
        };
        if tokens.len() < 2 {
            return AuthorName::Literal(name.to_string());
        }
        // Particles before the last token belong to the family name, as long
        // as one given name remains.
        let mut split = tokens.len() - 1;
        while split > 1 && is_particle(tokens[split - 1]) {
            split -= 1;
        }
        AuthorName::Person {
            family: tokens[split..].join(" "),
            given: tokens[..split].join(" "),
            suffix,
        }
    }

    fn parse_inverted(name: &str) -> Self {
        let parts: Vec<&str> = name
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [] => AuthorName::Literal(String::new()),
            [single] => Self::parse(single),
            // "Martin Luther King, Jr."
            [head, tail] if is_suffix(tail) => match Self::parse(head) {
                AuthorName::Person { family, given, .. } => AuthorName::Person {
                    family,
                    given,
                    suffix: Some(tail.to_string()),
                },
                AuthorName::Literal(family) => AuthorName::Person {
                    family,
                    given: String::new(),
                    suffix: Some(tail.to_string()),
                },
            },
            [family, rest @ ..] => {
                let suffix = rest.iter().find(|p| is_suffix(p)).map(|p| p.to_string());
                let given = rest
                    .iter()
                    .filter(|p| !is_suffix(p))
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
                AuthorName::Person {
                    family: family.to_string(),
                    given,
                    suffix,
                }
            }
        }
    }

    /// The family name, or the whole literal.
    pub fn family(&self) -> &str {
        match self {
            AuthorName::Person { family, .. } => family,
            AuthorName::Literal(name) => name,
        }
    }

    /// "Last, Initials" form used by APA.
    pub fn to_initialized(&self) -> String {
        match self {
            AuthorName::Person {
                family,
                given,
                suffix,
            } => {
                let mut out = family.clone();
                if !given.is_empty() {
                    out.push_str(", ");
                    out.push_str(&initials(given));
                }
                if let Some(suffix) = suffix {
                    out.push_str(", ");
                    out.push_str(suffix);
                }
                out
            }
            AuthorName::Literal(name) => name.clone(),
        }
    }
}

impl fmt::Display for AuthorName {
    /// "Last, First Middle" form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorName::Person {
                family,
                given,
                suffix,
            } => {
                write!(f, "{}", family)?;
                if !given.is_empty() {
                    write!(f, ", {}", given)?;
                }
                if let Some(suffix) = suffix {
                    write!(f, ", {}", suffix)?;
                }
                Ok(())
            }
            AuthorName::Literal(name) => write!(f, "{}", name),
        }
    }
}

/// Split a free-text author field into individual names.
///
/// Names may be joined by "and", "&", ";" or "|". A comma-separated segment is
/// one inverted name ("Doe, Jane", "Van Gogh, Vincent Willem"), unless every
/// part looks like a full "First Last" name ("Jane Doe, John Smith") or the
/// parts pair up into several inverted names ("Doe, Jane, Smith, John").
pub fn split_authors(raw: &str) -> Vec<String> {
    let raw = raw.replace('&', " and ");
    let mut names = Vec::new();

    for segment in AUTHOR_SEPARATOR.split(&raw) {
        let segment = segment.trim().trim_matches(',').trim();
        if segment.is_empty() {
            continue;
        }
        if !segment.contains(',') {
            names.push(segment.to_string());
            continue;
        }

        let parts: Vec<&str> = segment
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let inverted = parts.first().is_some_and(|p| leads_with_particle(p));
        if inverted || parts.iter().any(|p| is_suffix(p)) {
            names.push(segment.to_string());
        } else if parts.len() >= 2 && parts.iter().all(|p| p.split_whitespace().count() >= 2) {
            names.extend(parts.iter().map(|p| p.to_string()));
        } else if parts.len() >= 4 && parts.len() % 2 == 0 {
            names.extend(parts.chunks(2).map(|pair| pair.join(", ")));
        } else {
            names.push(segment.to_string());
        }
    }

    names
}

/// Convert a name to "Last, First Middle" order.
///
/// Single-token names (organizations) pass through unchanged.
pub fn to_last_first(name: &str) -> String {
    AuthorName::parse(name).to_string()
}

/// Compress given names to initials: "Jane Mary" becomes "J. M.".
pub fn initials(s: &str) -> String {
    s.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .map(|c| format!("{}.", c.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse every name in a raw author field.
pub fn parse_authors(raw: &str) -> Vec<AuthorName> {
    split_authors(raw)
        .iter()
        .map(|name| AuthorName::parse(name))
        .collect()
}

fn format_list(names: Vec<String>, and_str: &str) -> String {
    match names.len() {
        0 => String::new(),
        1 => names.into_iter().next().unwrap_or_default(),
        2 => format!("{} {} {}", names[0], and_str, names[1]),
        n => format!("{}, {} {}", names[..n - 1].join(", "), and_str, names[n - 1]),
    }
}

/// Render a raw author field according to a style's naming and joining rules.
pub fn format_authors(raw: &str, style: Style) -> String {
    let authors = parse_authors(raw);
    match style {
        Style::Apa => format_list(
            authors.iter().map(AuthorName::to_initialized).collect(),
            "&",
        ),
        Style::Mla | Style::Chicago => {
            format_list(authors.iter().map(ToString::to_string).collect(), "and")
        }
    }
}

/// The family name of the first author, for short in-text references.
pub fn first_family_name(raw: &str) -> Option<String> {
    parse_authors(raw)
        .first()
        .map(|name| name.family().to_string())
        .filter(|family| !family.is_empty())
}
