/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct Html;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl OutputFormat for Html {
    fn text(&self, s: &str) -> String {
        escape(s)
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("<i>{}</i>", content)
    }

    fn quote(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("\u{201C}{}\u{201D}", content)
    }

    fn link(&self, url: &str, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!(r#"<a href="{}">{}</a>"#, escape(url), content)
    }

    fn finish(&self, output: String) -> String {
        format!(r#"<div class="cite-entry">{}</div>"#, output)
    }
}
