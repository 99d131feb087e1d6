/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The citation input record.
//!
//! A record is built fresh from the current field values for every formatting
//! request and passed by reference into the formatting functions. All fields
//! are plain strings; an empty string means "not supplied".

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The source type of a record, derived from which fields are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// A web page or online article.
    Web,
    /// A whole book.
    Book,
    /// A chapter or page range within a book.
    Chapter,
}

impl Kind {
    pub fn is_book(&self) -> bool {
        matches!(self, Kind::Book | Kind::Chapter)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Web => "web",
            Kind::Book => "book",
            Kind::Chapter => "chapter",
        }
    }
}

/// Raw bibliographic fields for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct CitationRecord {
    // Web fields
    pub author: String,
    pub title: String,
    pub site: String,
    /// Publication date, ISO `YYYY-MM-DD` or empty.
    pub date: String,
    pub url: String,
    /// Access date, ISO `YYYY-MM-DD` or empty.
    pub accessed: String,

    // Book and chapter fields
    pub book_author: String,
    pub book_title: String,
    pub publisher: String,
    /// Four-digit publication year.
    pub year: String,
    pub edition: String,
    pub city: String,
    pub chapter_title: String,
    /// Free text, may be a range such as `12-34`.
    pub pages: String,
    pub isbn: String,
}

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

fn first_filled<'a>(primary: &'a str, fallback: &'a str) -> &'a str {
    if filled(primary) {
        primary.trim()
    } else {
        fallback.trim()
    }
}

impl CitationRecord {
    /// Return a copy with every field trimmed of surrounding whitespace.
    pub fn normalized(&self) -> Self {
        Self {
            author: self.author.trim().to_string(),
            title: self.title.trim().to_string(),
            site: self.site.trim().to_string(),
            date: self.date.trim().to_string(),
            url: self.url.trim().to_string(),
            accessed: self.accessed.trim().to_string(),
            book_author: self.book_author.trim().to_string(),
            book_title: self.book_title.trim().to_string(),
            publisher: self.publisher.trim().to_string(),
            year: self.year.trim().to_string(),
            edition: self.edition.trim().to_string(),
            city: self.city.trim().to_string(),
            chapter_title: self.chapter_title.trim().to_string(),
            pages: self.pages.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
        }
    }

    /// True if any field that only makes sense for books is filled in.
    pub fn is_book_data(&self) -> bool {
        [
            &self.book_title,
            &self.book_author,
            &self.publisher,
            &self.year,
            &self.chapter_title,
            &self.pages,
        ]
        .iter()
        .any(|s| filled(s))
    }

    /// Resolve the source type. Chapter title or pages select the chapter form.
    pub fn kind(&self) -> Kind {
        if !self.is_book_data() {
            Kind::Web
        } else if filled(&self.chapter_title) || filled(&self.pages) {
            Kind::Chapter
        } else {
            Kind::Book
        }
    }

    /// The author string that applies to the given kind.
    ///
    /// Book kinds prefer `book_author` and fall back to `author`.
    pub fn author_for(&self, kind: Kind) -> &str {
        if kind.is_book() {
            first_filled(&self.book_author, &self.author)
        } else {
            self.author.trim()
        }
    }

    /// The title of the book itself, falling back to the general title.
    pub fn book_title_or_title(&self) -> &str {
        first_filled(&self.book_title, &self.title)
    }

    /// Seed a web record from bookmarklet query parameters
    /// (`t` title, `u` url, `s` site, `a` author, `d` date).
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut record = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim().to_string();
            match key.as_ref() {
                "t" => record.title = value,
                "u" => record.url = value,
                "s" => record.site = value,
                "a" => record.author = value,
                "d" => record.date = value,
                _ => {}
            }
        }
        record
    }
}
