//! Header-labelled prompt for the token editor

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing a header label in front of the input line
pub struct HeaderPrompt {
    /// Label text
    header: String,
    /// Hint shown on the right while editing
    placeholder: String,
}

impl HeaderPrompt {
    /// Create a new header prompt
    ///
    /// # Arguments
    /// * `header` - Label in front of the input (empty for none)
    /// * `placeholder` - Right-hand hint text
    ///
    /// # Returns
    /// * `Self` - New prompt
    pub fn new(header: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            placeholder: placeholder.into(),
        }
    }
}

impl Prompt for HeaderPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        if self.header.is_empty() {
            "> ".into()
        } else {
            format!("{}> ", self.header).into()
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.placeholder)
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    /// Render the history search prompt
    ///
    /// # Arguments
    /// * `history_search` - History search state
    ///
    /// # Returns
    /// * `Cow<str>` - History search prompt
    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
