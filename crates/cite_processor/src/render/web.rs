/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Web page templates.

use cite_core::{CitationRecord, Style};

use super::component::Segment;
use super::format::OutputFormat;
use crate::values::{format_authors, format_date, format_date_apa, format_date_mla};
use crate::values::{sentence_case, title_case};

fn url<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Segment {
    Segment::text(fmt, &record.url).link(fmt, &record.url)
}

/// `Author. "Title." Site, Date, URL. Accessed Date.`
pub fn mla<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Vec<Segment> {
    vec![
        Segment::text(fmt, &format_authors(&record.author, Style::Mla)).period(),
        Segment::text(fmt, &title_case(&record.title))
            .period()
            .quote(fmt),
        Segment::join(
            [
                Segment::text(fmt, &record.site),
                Segment::text(fmt, &format_date_mla(&record.date)),
                url(fmt, record),
            ],
            ", ",
        )
        .period(),
        Segment::text(fmt, &format_date_mla(&record.accessed))
            .prefix("Accessed ")
            .period(),
    ]
}

/// `Author. (Date). Title. Site. URL`
pub fn apa<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Vec<Segment> {
    vec![
        Segment::text(fmt, &format_authors(&record.author, Style::Apa)).period(),
        Segment::text(fmt, &format_date_apa(&record.date))
            .parens()
            .period(),
        Segment::text(fmt, &sentence_case(&record.title)).period(),
        Segment::text(fmt, &record.site).period(),
        url(fmt, record),
    ]
}

/// `Author. "Title." Site. Date. URL.`
pub fn chicago<F: OutputFormat>(fmt: &F, record: &CitationRecord) -> Vec<Segment> {
    vec![
        Segment::text(fmt, &format_authors(&record.author, Style::Chicago)).period(),
        Segment::text(fmt, &title_case(&record.title))
            .period()
            .quote(fmt),
        Segment::text(fmt, &record.site).period(),
        Segment::text(fmt, &format_date(&record.date, Style::Chicago)).period(),
        url(fmt, record).period(),
    ]
}
