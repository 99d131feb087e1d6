/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field-level transforms.
//!
//! Each function takes one raw field value and returns its formatted form.
//! None of them fail: malformed input is passed through or reported as `None`.

pub mod date;
pub mod isbn;
pub mod names;
pub mod number;
pub mod title;


pub use date::{format_date, format_date_apa, format_date_mla};
pub use isbn::{is_valid_isbn13, isbn13_check_digit, normalize_isbn, to_isbn13};
pub use names::{
    first_family_name, format_authors, initials, parse_authors, split_authors, to_last_first,
    AuthorName,
};
pub use number::{check_plural, first_page, format_edition, format_pages};
pub use title::{sentence_case, style_case, title_case};
