// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTML markup dialect, as accepted by the Telegram Bot API.

use super::Markup;

/// HTML formatting primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn link(&self, target: &str, text: &str) -> String {
        format!("<a href=\"{target}\">{text}</a>")
    }

    fn strong(&self, text: &str) -> String {
        format!("<strong>{text}</strong>")
    }

    fn code(&self, text: &str) -> String {
        format!("<code>{text}</code>")
    }

    fn code_block(&self, text: &str) -> String {
        format!("<pre>{text}</pre>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_primitives() {
        let m = HtmlMarkup;
        assert_eq!(
            m.link("https://example.com", "example"),
            "<a href=\"https://example.com\">example</a>"
        );
        assert_eq!(m.strong("Memo:"), "<strong>Memo:</strong>");
        assert_eq!(m.code("1.00 atom"), "<code>1.00 atom</code>");
        assert_eq!(m.code_block("line1\nline2"), "<pre>line1\nline2</pre>");
    }
}
