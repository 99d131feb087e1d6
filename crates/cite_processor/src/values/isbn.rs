/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! ISBN normalization.
//!
//! Invalid identifiers yield `None` rather than an error, so callers can treat
//! "not an ISBN" as an ordinary branch.

/// Keep only digits and the `X` check character.
fn strip(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => Some(c),
            'x' | 'X' => Some('X'),
            _ => None,
        })
        .collect()
}

/// Check digit for a 12-digit ISBN-13 base (weights 1, 3 alternating).
pub fn isbn13_check_digit(base: &str) -> Option<char> {
    if base.len() != 12 {
        return None;
    }
    let mut sum = 0;
    for (i, c) in base.chars().enumerate() {
        let digit = c.to_digit(10)?;
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }
    char::from_digit((10 - sum % 10) % 10, 10)
}

/// Convert an ISBN-10 to its ISBN-13 form.
///
/// Only the first nine digits are used; the ISBN-10 check character is
/// replaced by a freshly computed ISBN-13 check digit.
pub fn to_isbn13(isbn10: &str) -> Option<String> {
    let cleaned = strip(isbn10);
    if cleaned.len() != 10 {
        return None;
    }
    let base = format!("978{}", &cleaned[..9]);
    let check = isbn13_check_digit(&base)?;
    Some(format!("{}{}", base, check))
}

/// Normalize any ISBN to 13 digits, or `None` if it has no valid form.
pub fn normalize_isbn(value: &str) -> Option<String> {
    let cleaned = strip(value);
    match cleaned.len() {
        10 => to_isbn13(&cleaned),
        13 if cleaned.chars().all(|c| c.is_ascii_digit()) => Some(cleaned),
        _ => None,
    }
}

/// True if a 13-digit ISBN carries the correct check digit.
pub fn is_valid_isbn13(value: &str) -> bool {
    let cleaned = strip(value);
    cleaned.len() == 13
        && isbn13_check_digit(&cleaned[..12])
            .is_some_and(|check| cleaned.ends_with(check))
}
