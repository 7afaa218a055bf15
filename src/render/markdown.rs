// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Slack mrkdwn dialect.

use super::Markup;

/// Slack mrkdwn formatting primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrkdwnMarkup;

impl Markup for MrkdwnMarkup {
    fn link(&self, target: &str, text: &str) -> String {
        format!("<{target}|{text}>")
    }

    fn strong(&self, text: &str) -> String {
        format!("*{text}*")
    }

    fn code(&self, text: &str) -> String {
        format!("`{text}`")
    }

    fn code_block(&self, text: &str) -> String {
        format!("```{text}```")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mrkdwn_primitives() {
        let m = MrkdwnMarkup;
        assert_eq!(
            m.link("https://example.com", "example"),
            "<https://example.com|example>"
        );
        assert_eq!(m.strong("Memo:"), "*Memo:*");
        assert_eq!(m.code("1.00 atom"), "`1.00 atom`");
        assert_eq!(m.code_block("line1\nline2"), "```line1\nline2```");
    }
}
