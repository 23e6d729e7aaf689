//! Token-by-token autocomplete library
//!
//! This library completes delimited input one token at a time: in
//! `"Mon, Tu"` only `"Tu"` is matched against the vocabulary, and accepting
//! `"Tuesday"` yields `"Mon, Tuesday, "`.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Token extraction, matching, and the completion engine
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `repl`: Interactive line editor wired to the engine
//!
//! # Example
//!
//! ```
//! use multicomplete::TokenAutocompleteEngine;
//!
//! let mut engine = TokenAutocompleteEngine::new(["Monday", "Tuesday"]);
//! engine.edit("Mon, Tu", 7, true);
//!
//! let candidates: Vec<&str> = engine.filter_current().collect();
//! assert_eq!(candidates, ["Tuesday"]);
//!
//! engine.accept_completion("Tuesday").unwrap();
//! assert_eq!(engine.text(), "Mon, Tuesday, ");
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod repl;

// Re-export commonly used types
pub use completion::TokenAutocompleteEngine;
pub use config::Config;
pub use error::{MulticompleteError, Result};
pub use repl::ReplEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
