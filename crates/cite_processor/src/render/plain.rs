/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn emph(&self, content: String) -> String {
        // Plain text has no italics; the text is pasted into a word processor as-is.
        content
    }

    fn quote(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("\"{}\"", content)
    }

    fn link(&self, _url: &str, content: String) -> String {
        content
    }
}
