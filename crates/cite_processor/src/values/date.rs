use cite_core::Style;
use cite_date::{Date, Precision};

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn month_name(names: &[&'static str; 12], month: Option<u32>) -> &'static str {
    month
        .and_then(|m| names.get((m as usize).wrapping_sub(1)))
        .copied()
        .unwrap_or_default()
}

/// Parse `iso` and render it with `render`, or hand the input back unchanged
/// when it is empty or not a calendar date.
fn format_with(iso: &str, render: impl Fn(&Date) -> String) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.parse::<Date>() {
        Ok(date) => render(&date),
        Err(_) => iso.to_string(),
    }
}

/// MLA form: "14 May 2023".
pub fn format_date_mla(iso: &str) -> String {
    format_with(iso, |date| {
        let month = month_name(&MONTHS_SHORT, date.month);
        match (date.precision(), date.day) {
            (Precision::Day, Some(day)) => format!("{} {} {}", day, month, date.year),
            (Precision::Month, _) => format!("{} {}", month, date.year),
            _ => date.year.to_string(),
        }
    })
}

/// APA form: "2023, May 14".
pub fn format_date_apa(iso: &str) -> String {
    format_with(iso, |date| {
        let month = month_name(&MONTHS_LONG, date.month);
        match (date.precision(), date.day) {
            (Precision::Day, Some(day)) => format!("{}, {} {}", date.year, month, day),
            (Precision::Month, _) => format!("{}, {}", date.year, month),
            _ => date.year.to_string(),
        }
    })
}

/// The publication-date form a style uses for web sources. Chicago shares
/// the APA form.
pub fn format_date(iso: &str, style: Style) -> String {
    match style {
        Style::Mla => format_date_mla(iso),
        Style::Apa | Style::Chicago => format_date_apa(iso),
    }
}
