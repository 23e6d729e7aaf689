//! Completer for reedline - provides token completion suggestions

use reedline::{Completer, Span, Suggestion};

use crate::completion::TokenAutocompleteEngine;

/// Token-at-cursor completer for reedline
pub struct TokenCompleter {
    /// Engine used to find the current token and its candidates
    engine: TokenAutocompleteEngine,
}

impl TokenCompleter {
    /// Create a new token completer
    ///
    /// # Arguments
    /// * `engine` - Configured engine; its buffer is overwritten on every request
    pub fn new(engine: TokenAutocompleteEngine) -> Self {
        Self { engine }
    }
}

/// Convert a byte position in `line` into a character count
pub(crate) fn char_cursor(line: &str, pos: usize) -> usize {
    line.get(..pos).unwrap_or(line).chars().count()
}

/// Convert a character count in `line` into a byte position
pub(crate) fn byte_position(line: &str, chars: usize) -> usize {
    line.char_indices()
        .nth(chars)
        .map_or(line.len(), |(idx, _)| idx)
}

impl Completer for TokenCompleter {
    /// Complete the token under the cursor
    ///
    /// Each suggestion replaces everything from the start of the current
    /// token to the end of the line, matching what accepting the candidate
    /// in the engine produces.
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        self.engine.edit(line, char_cursor(line, pos), true);
        let start = byte_position(line, self.engine.token_start());

        let candidates: Vec<String> = self
            .engine
            .filter_current()
            .map(str::to_string)
            .collect();

        tracing::trace!(
            token = self.engine.current_token(),
            count = candidates.len(),
            "completion requested"
        );

        candidates
            .into_iter()
            .map(|candidate| Suggestion {
                value: self.engine.replacement_for(&candidate),
                description: None,
                style: None,
                extra: None,
                span: Span::new(start, line.len()),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MatchMode;

    fn create_test_completer() -> TokenCompleter {
        TokenCompleter::new(TokenAutocompleteEngine::new([
            "Monday", "Tuesday", "Thursday", "Sunday",
        ]))
    }

    #[test]
    fn test_complete_current_token() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("Mon, T", 6);

        let values: Vec<_> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["Tuesday, ", "Thursday, "]);
    }

    #[test]
    fn test_span_position() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("Mon, Tu", 7);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].span.start, 5);
        assert_eq!(suggestions[0].span.end, 7);
    }

    #[test]
    fn test_span_covers_rest_of_line() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("Mo, Tue", 2);

        assert_eq!(suggestions[0].value, "Monday, ");
        assert_eq!(suggestions[0].span.start, 0);
        assert_eq!(suggestions[0].span.end, 7);
    }

    #[test]
    fn test_empty_token_offers_everything() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("Mon, ", 5);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions.iter().all(|s| s.span.start == 5));
    }

    #[test]
    fn test_multibyte_span_in_bytes() {
        let mut completer = TokenCompleter::new(TokenAutocompleteEngine::new(["東京"]));
        let line = "大阪, 東";
        let suggestions = completer.complete(line, line.len());
        assert_eq!(suggestions[0].span.start, "大阪, ".len());
        assert_eq!(suggestions[0].value, "東京, ");
    }

    #[test]
    fn test_substring_mode() {
        let mut engine = TokenAutocompleteEngine::new(["Monday", "Sunday"]);
        engine.set_match_mode(MatchMode::SubstringAnywhere);
        let mut completer = TokenCompleter::new(engine);

        let suggestions = completer.complete("DAY", 3);
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_position_conversions() {
        assert_eq!(char_cursor("大阪", 3), 1);
        assert_eq!(byte_position("大阪", 1), 3);
        assert_eq!(byte_position("大阪", 5), 6);
    }
}
