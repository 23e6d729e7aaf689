//! Token autocomplete engine - owns the buffer and applies completions
//!
//! This module provides the engine that ties the completion components
//! together: separator-aware token extraction, vocabulary filtering, the
//! edit-cycle state machine, and the replacement performed when a candidate
//! is accepted.

use tracing::{debug, trace};

use super::matcher::{CaseSensitivity, Candidates, MatchMode, filter_vocabulary};
use super::separator::Separator;
use super::state::{EditEvent, EditState, PopupDirective};
use super::tokens::extract_token_list;
use crate::error::{CompletionError, Result};

/// Result of feeding an edit into the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Current token after the edit
    pub prefix: String,
    /// Whether the current token differs from the one before the edit
    pub prefix_changed: bool,
    /// What the presentation layer should do with its popup
    pub popup: PopupDirective,
}

/// Word-aware autocomplete over a delimited text buffer
///
/// Cursor positions are counted in characters, not bytes.
#[derive(Debug, Clone)]
pub struct TokenAutocompleteEngine {
    text: String,
    cursor: usize,
    separator: Separator,
    add_space_after_completing: bool,
    vocabulary: Vec<String>,
    match_mode: MatchMode,
    case_sensitivity: CaseSensitivity,
    state: EditState,
    prefix: String,
    last_completed: Option<String>,
}

/// Builder for [`TokenAutocompleteEngine`]
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    vocabulary: Vec<String>,
    separator: char,
    add_space_after_completing: bool,
    match_mode: MatchMode,
    case_sensitivity: CaseSensitivity,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            vocabulary: Vec::new(),
            separator: Separator::COMMA.as_char(),
            add_space_after_completing: true,
            match_mode: MatchMode::default(),
            case_sensitivity: CaseSensitivity::default(),
        }
    }
}

impl EngineBuilder {
    pub fn vocabulary<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn add_space_after_completing(mut self, enabled: bool) -> Self {
        self.add_space_after_completing = enabled;
        self
    }

    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case_sensitivity = case;
        self
    }

    /// Build the engine with an empty buffer
    ///
    /// # Errors
    /// * `ConfigError::InvalidSeparator` - if the separator is a control character
    pub fn build(self) -> Result<TokenAutocompleteEngine> {
        Ok(TokenAutocompleteEngine {
            text: String::new(),
            cursor: 0,
            separator: Separator::new(self.separator)?,
            add_space_after_completing: self.add_space_after_completing,
            vocabulary: self.vocabulary,
            match_mode: self.match_mode,
            case_sensitivity: self.case_sensitivity,
            state: EditState::Idle,
            prefix: String::new(),
            last_completed: None,
        })
    }
}

impl TokenAutocompleteEngine {
    /// Create an engine with default settings over the given vocabulary
    ///
    /// Defaults: `,` separator, separator and space appended after each
    /// completion, prefix matching, case-insensitive.
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: String::new(),
            cursor: 0,
            separator: Separator::default(),
            add_space_after_completing: true,
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            match_mode: MatchMode::default(),
            case_sensitivity: CaseSensitivity::default(),
            state: EditState::Idle,
            prefix: String::new(),
            last_completed: None,
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /* ========================= Buffer ========================= */

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Candidate accepted by the most recent successful completion
    pub fn last_completed(&self) -> Option<&str> {
        self.last_completed.as_deref()
    }

    /// Replace the buffer and place the cursor at its end
    pub fn set_text(&mut self, text: impl Into<String>) -> EditOutcome {
        self.text = text.into();
        self.cursor = self.text.chars().count();
        self.apply_edit(false)
    }

    /// Move the cursor, clamped to the buffer length
    pub fn set_cursor(&mut self, cursor: usize) -> EditOutcome {
        self.cursor = cursor.min(self.text.chars().count());
        self.apply_edit(false)
    }

    /// Feed one edit from the presentation layer
    ///
    /// # Arguments
    /// * `text` - Buffer contents after the edit
    /// * `cursor` - Cursor position in characters, clamped to the buffer length
    /// * `typed` - Whether the edit inserted text (as opposed to navigation)
    pub fn edit(&mut self, text: impl Into<String>, cursor: usize, typed: bool) -> EditOutcome {
        self.text = text.into();
        self.cursor = cursor.min(self.text.chars().count());
        self.apply_edit(typed)
    }

    /// Close the open token without touching the buffer
    pub fn cancel(&mut self) {
        self.transition(EditEvent::Cancel);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.prefix.clear();
        self.transition(EditEvent::Cancel);
    }

    fn apply_edit(&mut self, typed: bool) -> EditOutcome {
        let prefix = self.current_token().to_string();
        let prefix_changed = prefix != self.prefix;

        self.transition(EditEvent::Edit {
            token_empty: prefix.is_empty(),
            prefix_changed,
        });

        let popup = if prefix.is_empty() {
            PopupDirective::Hide
        } else if typed {
            PopupDirective::Show
        } else {
            PopupDirective::Keep
        };

        self.prefix.clone_from(&prefix);
        EditOutcome {
            prefix,
            prefix_changed,
            popup,
        }
    }

    fn transition(&mut self, event: EditEvent) {
        let next = self.state.next(event);
        if next != self.state {
            trace!(from = ?self.state, to = ?next, ?event, "edit state transition");
        }
        self.state = next;
    }

    /* ========================= Tokens ========================= */

    /// The token between the nearest separator before the cursor and the cursor
    ///
    /// With trailing spaces enabled, a single leading space is dropped, since
    /// every accepted completion is followed by the separator and one space.
    pub fn current_token(&self) -> &str {
        let head = &self.text[..self.byte_offset(self.cursor)];
        let sep = self.separator.as_char();
        let start = head.rfind(sep).map_or(0, |idx| idx + sep.len_utf8());
        let token = &head[start..];

        if self.add_space_after_completing {
            token.strip_prefix(' ').unwrap_or(token)
        } else {
            token
        }
    }

    /// Character offset where the current token starts
    pub fn token_start(&self) -> usize {
        self.cursor
            .saturating_sub(self.current_token().chars().count())
    }

    /// Ordered list of the tokens entered in the whole buffer
    pub fn extract_token_list(&self) -> Vec<String> {
        extract_token_list(&self.text, self.separator)
    }

    /* ========================= Filtering ========================= */

    /// Vocabulary entries matching `prefix` under the current options
    pub fn filter_vocabulary(&self, prefix: &str) -> Candidates<'_> {
        filter_vocabulary(
            prefix,
            &self.vocabulary,
            self.match_mode,
            self.case_sensitivity,
        )
    }

    /// Vocabulary entries matching the current token
    pub fn filter_current(&mut self) -> Candidates<'_> {
        self.transition(EditEvent::Filter);
        let prefix = self.current_token().to_string();
        self.filter_vocabulary(&prefix)
    }

    /* ========================= Completion ========================= */

    /// Text that accepting `candidate` places after the stable prefix
    pub fn replacement_for(&self, candidate: &str) -> String {
        if self.add_space_after_completing {
            format!("{candidate}{}", self.separator.completion_suffix())
        } else {
            candidate.to_string()
        }
    }

    /// Replace the current token with `candidate`
    ///
    /// Everything from the start of the current token onwards is replaced,
    /// and the cursor moves to the end of the new buffer.
    ///
    /// # Errors
    /// * `CompletionError::NoActiveToken` - if no token is open
    /// * `CompletionError::InvalidReplacementState` - if the token is longer
    ///   than the text before the cursor
    pub fn accept_completion(&mut self, candidate: &str) -> Result<()> {
        if !self.state.can_accept() {
            return Err(CompletionError::NoActiveToken.into());
        }

        let token_len = self.current_token().chars().count();
        if token_len > self.cursor {
            return Err(CompletionError::InvalidReplacementState {
                token_len,
                cursor: self.cursor,
            }
            .into());
        }

        let stable_end = self.byte_offset(self.cursor - token_len);
        let mut text = self.text[..stable_end].to_string();
        text.push_str(&self.replacement_for(candidate));

        self.cursor = text.chars().count();
        self.text = text;
        self.prefix = self.current_token().to_string();
        self.last_completed = Some(candidate.to_string());
        self.transition(EditEvent::Accept);

        debug!(candidate, cursor = self.cursor, "completion accepted");
        Ok(())
    }

    /* ========================= Configuration ========================= */

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Replace the vocabulary wholesale
    pub fn set_vocabulary<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = items.into_iter().map(Into::into).collect();
        debug!(count = self.vocabulary.len(), "vocabulary replaced");
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// # Errors
    /// * `ConfigError::InvalidSeparator` - if `separator` is a control character
    pub fn set_separator(&mut self, separator: char) -> Result<()> {
        self.separator = Separator::new(separator)?;
        self.apply_edit(false);
        Ok(())
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.match_mode = mode;
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    pub fn set_case_sensitivity(&mut self, case: CaseSensitivity) {
        self.case_sensitivity = case;
    }

    pub fn add_space_after_completing(&self) -> bool {
        self.add_space_after_completing
    }

    pub fn set_add_space_after_completing(&mut self, enabled: bool) {
        self.add_space_after_completing = enabled;
        self.apply_edit(false);
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}

impl Default for TokenAutocompleteEngine {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}
