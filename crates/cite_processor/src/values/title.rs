use cite_core::Style;

/// Short function words left lowercase inside a title-cased string.
const STOP_WORDS: [&str; 28] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "per",
    "the", "to", "vs", "via", "with", "over", "under", "into", "onto", "from", "up", "down",
    "so", "yet",
];

fn capitalize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut done = false;
    for c in segment.chars() {
        if !done && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            done = true;
        } else {
            out.push(c);
        }
    }
    out
}

fn capitalize_hyphenated(word: &str) -> String {
    word.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-")
}

/// Headline-style capitalization for MLA and Chicago.
///
/// The first and last words are always capitalized.
pub fn title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || i == last || !STOP_WORDS.contains(word) {
                capitalize_hyphenated(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sentence-style capitalization for APA: only the first character is uppercase.
pub fn sentence_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the title casing a style uses.
pub fn style_case(s: &str, style: Style) -> String {
    match style {
        Style::Apa => sentence_case(s),
        Style::Mla | Style::Chicago => title_case(s),
    }
}
