//! Interactive token editor for multicomplete
//!
//! This module provides a terminal front end for the completion engine:
//! - Line editing and history with reedline
//! - Tab completion of the token under the cursor
//! - Inline hints for the first matching candidate
//! - Highlighting of tokens missing from the vocabulary
//! - Header-labelled prompt

mod completer;
mod engine;
mod highlighter;
mod hinter;
mod prompt;

pub use completer::TokenCompleter;
pub use engine::ReplEngine;
pub use highlighter::TokenHighlighter;
pub use hinter::TokenHinter;
pub use prompt::HeaderPrompt;
