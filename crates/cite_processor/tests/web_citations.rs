/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use cite_core::{CitationRecord, Kind, Style};
use cite_processor::{compose, compose_kind, Html, PlainText, Processor};

#[test]
fn test_web_mla() {
    let record = make_web();
    assert_eq!(
        Processor::new(Style::Mla).format(&record),
        "Doe, Jane. \"Example.\" Site, 14 May 2023, https://x.com. Accessed 1 Jun 2023."
    );
}

#[test]
fn test_web_apa() {
    let record = make_web();
    assert_eq!(
        Processor::new(Style::Apa).format(&record),
        "Doe, J. (2023, May 14). Example. Site. https://x.com"
    );
}

#[test]
fn test_web_chicago() {
    let record = make_web();
    assert_eq!(
        Processor::new(Style::Chicago).format(&record),
        "Doe, Jane. \"Example.\" Site. 2023, May 14. https://x.com."
    );
}

#[test]
fn test_web_required_fields_present_in_every_style() {
    let record = make_web();
    for style in Style::ALL {
        let out = Processor::new(style).format(&record);
        assert!(out.contains("Doe"), "{style}: {out}");
        assert!(out.contains("Example"), "{style}: {out}");
        assert!(out.contains("Site"), "{style}: {out}");
        assert!(out.contains("2023"), "{style}: {out}");
        assert!(out.contains("https://x.com"), "{style}: {out}");
    }
}

#[test]
fn test_web_missing_date_leaves_no_artifacts() {
    let record = CitationRecord {
        date: String::new(),
        ..make_web()
    };
    assert_eq!(
        Processor::new(Style::Mla).format(&record),
        "Doe, Jane. \"Example.\" Site, https://x.com. Accessed 1 Jun 2023."
    );
    for style in Style::ALL {
        let out = Processor::new(style).format(&record);
        assert!(is_clean(&out), "{style}: {out}");
    }
}

#[test]
fn test_web_missing_fields_in_any_combination() {
    let full = make_web();
    // Blank out every subset of the six web fields.
    for mask in 0u8..64 {
        let mut record = full.clone();
        let fields: [&mut String; 6] = [
            &mut record.author,
            &mut record.title,
            &mut record.site,
            &mut record.date,
            &mut record.url,
            &mut record.accessed,
        ];
        for (i, field) in fields.into_iter().enumerate() {
            if mask & (1 << i) != 0 {
                field.clear();
            }
        }
        for style in Style::ALL {
            let out = Processor::new(style).format(&record);
            assert!(is_clean(&out), "mask {mask} {style}: {out:?}");
            assert!(!out.starts_with(['.', ',']), "mask {mask} {style}: {out:?}");
        }
    }
}

#[test]
fn test_empty_record_renders_empty() {
    let record = CitationRecord::default();
    for style in Style::ALL {
        assert_eq!(Processor::new(style).format(&record), "");
    }
}

#[test]
fn test_whitespace_is_collapsed() {
    let record = CitationRecord {
        author: "  Jane   Doe ".to_string(),
        title: "An\n  Example".to_string(),
        site: " Site ".to_string(),
        ..Default::default()
    };
    assert_eq!(
        Processor::new(Style::Chicago).format(&record),
        "Doe, Jane. \"An Example.\" Site."
    );
}

#[test]
fn test_title_ending_in_question_mark() {
    let record = CitationRecord {
        title: "what is citation?".to_string(),
        ..make_web()
    };
    let out = Processor::new(Style::Mla).format(&record);
    assert!(out.contains("\"What Is Citation?\" Site"), "{out}");
    let out = Processor::new(Style::Apa).format(&record);
    assert!(out.contains("What is citation? Site."), "{out}");
}

#[test]
fn test_unparsable_date_passes_through() {
    let record = CitationRecord {
        date: "Spring 2021".to_string(),
        ..make_web()
    };
    let out = Processor::new(Style::Apa).format(&record);
    assert!(out.contains("(Spring 2021)."), "{out}");
}

#[test]
fn test_composition_is_idempotent() {
    let record = make_web();
    for style in Style::ALL {
        let first = compose(&PlainText, &record, style);
        let second = compose(&PlainText, &record, style);
        assert_eq!(first, second);
    }
    assert_eq!(record, make_web());
}

#[test]
fn test_compose_kind_overrides_detection() {
    let record = CitationRecord {
        publisher: "Penguin".to_string(),
        ..make_web()
    };
    assert_eq!(record.kind(), Kind::Book);
    let out = compose_kind(&PlainText, &record, Style::Apa, Kind::Web);
    assert_eq!(out, "Doe, J. (2023, May 14). Example. Site. https://x.com");
}

#[test]
fn test_web_html() {
    let record = make_web();
    let out = Processor::new(Style::Mla).format_with(&Html, &record);
    assert_eq!(
        out,
        "<div class=\"cite-entry\">Doe, Jane. \u{201C}Example.\u{201D} Site, 14 May 2023, \
         <a href=\"https://x.com\">https://x.com</a>. Accessed 1 Jun 2023.</div>"
    );
}

#[test]
fn test_html_escapes_text() {
    let record = CitationRecord {
        author: "AT&T".to_string(),
        title: "a <b> tag".to_string(),
        ..Default::default()
    };
    let out = Processor::new(Style::Chicago).format_with(&Html, &record);
    assert!(out.contains("&lt;B&gt;"), "{out}");
    assert!(!out.contains("<b>"), "{out}");
}
