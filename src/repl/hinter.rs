//! Hinter for reedline - shows the rest of the first matching candidate inline
//!
//! Hints match the typed token with exact case, so accepting one always
//! leaves a vocabulary entry as written. Tab completion follows the
//! configured case sensitivity and also fixes the casing of the token.

use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};

use super::completer::char_cursor;
use crate::completion::{CaseSensitivity, MatchMode, TokenAutocompleteEngine, filter_vocabulary};

/// Inline completion hinter for reedline
pub struct TokenHinter {
    /// Engine used to find the current token
    engine: TokenAutocompleteEngine,
    /// Style for hints
    style: Style,
    /// Current hint text
    current_hint: String,
}

impl TokenHinter {
    /// Create a new hinter with default style
    ///
    /// # Arguments
    /// * `engine` - Configured engine; its buffer is overwritten on every keystroke
    pub fn new(engine: TokenAutocompleteEngine) -> Self {
        Self {
            engine,
            style: Style::new().italic().fg(Color::DarkGray),
            current_hint: String::new(),
        }
    }

    /// Untyped remainder of the first candidate that starts with `token`
    fn remainder(&self, token: &str) -> Option<String> {
        filter_vocabulary(
            token,
            self.engine.vocabulary(),
            MatchMode::PrefixAtTokenStart,
            CaseSensitivity::Sensitive,
        )
        .filter_map(|candidate| candidate.strip_prefix(token))
        .find(|rest| !rest.is_empty())
        .map(str::to_string)
    }
}

impl Hinter for TokenHinter {
    /// Provide a hint for the current line
    ///
    /// # Arguments
    /// * `line` - The current input line
    /// * `pos` - Cursor position
    /// * `_history` - Command history (unused)
    /// * `use_ansi_coloring` - Whether to use ANSI colors
    /// * `_cwd` - Current working directory (unused)
    ///
    /// # Returns
    /// * `String` - Hint text to display after the cursor
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();

        // Only hint when the cursor is at the end of the line
        if pos != line.len() {
            return String::new();
        }

        self.engine.edit(line, char_cursor(line, pos), true);
        let token = self.engine.current_token().to_string();
        if token.is_empty() {
            return String::new();
        }

        match self.remainder(&token) {
            Some(hint) => {
                self.current_hint = hint;
                if use_ansi_coloring {
                    self.style.paint(&self.current_hint).to_string()
                } else {
                    self.current_hint.clone()
                }
            }
            None => String::new(),
        }
    }

    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    fn next_hint_token(&self) -> String {
        self.current_hint.clone()
    }
}
