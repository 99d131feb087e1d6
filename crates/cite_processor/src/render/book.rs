/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Whole-book and book-chapter templates.

use cite_core::{CitationRecord, Kind, Style};

use super::component::Segment;
use super::format::OutputFormat;
use crate::values::{format_authors, format_edition, format_pages, style_case};

fn author<F: OutputFormat>(fmt: &F, record: &CitationRecord, style: Style, kind: Kind) -> Segment {
    Segment::text(fmt, &format_authors(record.author_for(kind), style)).period()
}

fn book_title<F: OutputFormat>(fmt: &F, record: &CitationRecord, style: Style) -> Segment {
    Segment::text(fmt, &style_case(record.book_title_or_title(), style)).emph(fmt)
}

fn chapter_title<F: OutputFormat>(fmt: &F, record: &CitationRecord, style: Style) -> Segment {
    Segment::text(fmt, &style_case(&record.chapter_title, style))
}

fn edition<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Segment {
    Segment::text(fmt, &format_edition(&record.edition))
}

fn pages<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Segment {
    Segment::text(fmt, &format_pages(&record.pages))
}

/// `City: Publisher, Year.`
fn imprint<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Segment {
    Segment::join(
        [
            Segment::join(
                [
                    Segment::text(fmt, &record.city),
                    Segment::text(fmt, &record.publisher),
                ],
                ": ",
            ),
            Segment::text(fmt, &record.year),
        ],
        ", ",
    )
    .period()
}

/// Whole book: `Author. Title. Edition. Publisher, Year.`
/// Chapter: `Author. "Chapter." Book Title. Publisher, Year, pp. X-Y.`
pub fn mla<F: OutputFormat>(fmt: &F, record: &CitationRecord, kind: Kind) -> Vec<Segment> {
    let style = Style::Mla;
    match kind {
        Kind::Chapter => vec![
            author(fmt, record, style, kind),
            chapter_title(fmt, record, style).period().quote(fmt),
            book_title(fmt, record, style).period(),
            Segment::join(
                [
                    Segment::text(fmt, &record.publisher),
                    Segment::text(fmt, &record.year),
                    pages(fmt, record),
                ],
                ", ",
            )
            .period(),
        ],
        _ => vec![
            author(fmt, record, style, kind),
            book_title(fmt, record, style).period(),
            edition(fmt, record).period(),
            Segment::join(
                [
                    Segment::text(fmt, &record.publisher),
                    Segment::text(fmt, &record.year),
                ],
                ", ",
            )
            .period(),
        ],
    }
}

/// Whole book: `Author. (Year). Title (Edition). Publisher.`
/// Chapter: `Author. (Year). Chapter. In Book (Edition) (pp. X-Y). Publisher.`
pub fn apa<F: OutputFormat>(fmt: &F, record: &CitationRecord, kind: Kind) -> Vec<Segment> {
    let style = Style::Apa;
    let year = Segment::text(fmt, &record.year).parens().period();
    let publisher = Segment::text(fmt, &record.publisher).period();
    match kind {
        Kind::Chapter => vec![
            author(fmt, record, style, kind),
            year,
            chapter_title(fmt, record, style).period(),
            Segment::join(
                [
                    book_title(fmt, record, style),
                    edition(fmt, record).parens(),
                    pages(fmt, record).parens(),
                ],
                " ",
            )
            .prefix("In ")
            .period(),
            publisher,
        ],
        _ => vec![
            author(fmt, record, style, kind),
            year,
            Segment::join(
                [book_title(fmt, record, style), edition(fmt, record).parens()],
                " ",
            )
            .period(),
            publisher,
        ],
    }
}

/// Whole book: `Author. Title. Edition. City: Publisher, Year.`
/// Chapter: `Author. "Chapter." In Book, pp. X-Y. City: Publisher, Year.`
pub fn chicago<F: OutputFormat>(fmt: &F, record: &CitationRecord, kind: Kind) -> Vec<Segment> {
    let style = Style::Chicago;
    match kind {
        Kind::Chapter => vec![
            author(fmt, record, style, kind),
            chapter_title(fmt, record, style).period().quote(fmt),
            Segment::join([book_title(fmt, record, style), pages(fmt, record)], ", ")
                .prefix("In ")
                .period(),
            imprint(fmt, record),
        ],
        _ => vec![
            author(fmt, record, style, kind),
            book_title(fmt, record, style).period(),
            edition(fmt, record).period(),
            imprint(fmt, record),
        ],
    }
}
