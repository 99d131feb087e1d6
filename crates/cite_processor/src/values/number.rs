use std::sync::LazyLock;

use regex::Regex;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number pattern is valid"));

/// Simple heuristic: ranges and lists ("12-34", "3, 7", "1 & 3") are plural.
pub fn check_plural(value: &str) -> bool {
    value.contains('–') || value.contains('-') || value.contains(',') || value.contains('&')
}

/// Prefix a page locator with "p." or "pp.", unless it already carries a label.
pub fn format_pages(pages: &str) -> String {
    let pages = pages.trim();
    if pages.is_empty() {
        return String::new();
    }
    let lower = pages.to_lowercase();
    if lower.starts_with("p.") || lower.starts_with("pp.") || lower.starts_with("page") {
        return pages.to_string();
    }
    if check_plural(pages) {
        format!("pp. {}", pages)
    } else {
        format!("p. {}", pages)
    }
}

/// The first number appearing in a pages field ("12-34" gives "12").
pub fn first_page(pages: &str) -> Option<String> {
    FIRST_NUMBER.find(pages).map(|m| m.as_str().to_string())
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Render an edition: a bare number becomes "2nd ed.", anything else is kept.
pub fn format_edition(edition: &str) -> String {
    let edition = edition.trim();
    match edition.parse::<u32>() {
        Ok(n) if n > 0 => format!("{} ed.", ordinal(n)),
        _ => edition.to_string(),
    }
}
