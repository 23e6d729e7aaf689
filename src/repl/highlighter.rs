//! Token highlighter for the input line
//!
//! Tokens that are not in the vocabulary are flagged so the user can spot
//! typos before submitting. The token under the cursor is never flagged,
//! since it is still being typed.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::completion::{CaseSensitivity, Separator};

/// Highlighter flagging unknown tokens
pub struct TokenHighlighter {
    vocabulary: Vec<String>,
    separator: Separator,
    case_sensitivity: CaseSensitivity,
    enabled: bool,
    unknown_style: Style,
    separator_style: Style,
}

impl TokenHighlighter {
    /// Create a new token highlighter
    pub fn new(
        vocabulary: Vec<String>,
        separator: Separator,
        case_sensitivity: CaseSensitivity,
        enabled: bool,
    ) -> Self {
        Self {
            vocabulary,
            separator,
            case_sensitivity,
            enabled,
            unknown_style: Style::new().fg(Color::Red).underline(),
            separator_style: Style::new().fg(Color::DarkGray),
        }
    }

    fn is_known(&self, token: &str) -> bool {
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => self.vocabulary.iter().any(|v| v == token),
            CaseSensitivity::Insensitive => {
                let token = token.to_lowercase();
                self.vocabulary.iter().any(|v| v.to_lowercase() == token)
            }
        }
    }
}

impl Highlighter for TokenHighlighter {
    fn highlight(&self, line: &str, cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled || self.vocabulary.is_empty() {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let sep = self.separator.as_char();
        let mut offset = 0;

        for (i, segment) in line.split(sep).enumerate() {
            if i > 0 {
                styled.push((self.separator_style, sep.to_string()));
                offset += sep.len_utf8();
            }

            let under_cursor = (offset..=offset + segment.len()).contains(&cursor);
            let token = segment.trim();
            let style = if token.is_empty() || under_cursor || self.is_known(token) {
                Style::default()
            } else {
                self.unknown_style
            };

            styled.push((style, segment.to_string()));
            offset += segment.len();
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_highlighter() -> TokenHighlighter {
        TokenHighlighter::new(
            vec!["Monday".to_string(), "Tuesday".to_string()],
            Separator::COMMA,
            CaseSensitivity::Insensitive,
            true,
        )
    }

    fn rendered(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_text_is_preserved() {
        let highlighter = create_test_highlighter();
        let line = "Monday, Fooday, tue";
        let styled = highlighter.highlight(line, line.len());
        assert_eq!(rendered(&styled), line);
    }

    #[test]
    fn test_unknown_token_flagged() {
        let highlighter = create_test_highlighter();
        let line = "monday, Fooday, Tu";
        let styled = highlighter.highlight(line, line.len());

        let styles: Vec<_> = styled
            .buffer
            .iter()
            .filter(|(_, text)| text.trim() != ",")
            .map(|(style, text)| (text.trim().to_string(), *style))
            .collect();

        assert_eq!(styles[0], ("monday".to_string(), Style::default()));
        assert_eq!(styles[1].0, "Fooday");
        assert_ne!(styles[1].1, Style::default());
        // token being typed is left alone
        assert_eq!(styles[2], ("Tu".to_string(), Style::default()));
    }

    #[test]
    fn test_disabled_is_plain() {
        let highlighter = TokenHighlighter::new(
            vec!["Monday".to_string()],
            Separator::COMMA,
            CaseSensitivity::Insensitive,
            false,
        );
        let styled = highlighter.highlight("x, y", 4);
        assert_eq!(styled.buffer.len(), 1);
    }
}
