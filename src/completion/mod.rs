//! Word-aware completion over a delimited text buffer
//!
//! A widget's normal completer matches against its whole text. This module
//! completes one token at a time instead: the token under the cursor is the
//! text between the nearest separator and the cursor, and accepting a
//! candidate rewrites only that token.
//!
//! # Architecture
//!
//! - **Separator**: validated delimiter character
//! - **Matcher**: pure vocabulary filter (prefix or substring, with or without case)
//! - **State**: edit-cycle state machine driving popup visibility
//! - **Tokens**: splits a finished buffer into its entered tokens
//! - **Engine**: owns buffer, cursor and vocabulary and applies completions
//!
//! # Examples
//!
//! ```
//! use multicomplete::completion::TokenAutocompleteEngine;
//!
//! let mut engine = TokenAutocompleteEngine::new(["Monday", "Tuesday"]);
//! engine.set_text("Mon, Tu");
//!
//! let candidates: Vec<String> = engine.filter_current().map(str::to_string).collect();
//! assert_eq!(candidates, vec!["Tuesday"]);
//!
//! engine.accept_completion(&candidates[0]).unwrap();
//! assert_eq!(engine.text(), "Mon, Tuesday, ");
//! assert_eq!(engine.extract_token_list(), vec!["Mon", "Tuesday"]);
//! ```

mod engine;
mod matcher;
mod separator;
mod state;
mod tokens;

#[cfg(test)]
mod tests;

pub use engine::{EditOutcome, EngineBuilder, TokenAutocompleteEngine};
pub use matcher::{CaseSensitivity, Candidates, MatchMode, filter_vocabulary};
pub use separator::Separator;
pub use state::{EditEvent, EditState, PopupDirective};
pub use tokens::extract_token_list;
