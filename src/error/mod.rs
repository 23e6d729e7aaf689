//! Error handling module for multicomplete.
//!
//! This module provides the error hierarchy used throughout the crate:
//! - Completion errors raised by the token engine when a replacement is not possible
//! - Configuration errors raised while loading or validating settings
//! - A top-level error type that wraps both, plus I/O and free-form failures
//!
//! # Example
//!
//! ```rust
//! use multicomplete::error::{CompletionError, MulticompleteError, Result};
//!
//! fn accept() -> Result<()> {
//!     Err(CompletionError::NoActiveToken.into())
//! }
//!
//! assert!(matches!(
//!     accept(),
//!     Err(MulticompleteError::Completion(CompletionError::NoActiveToken))
//! ));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{CompletionError, ConfigError, MulticompleteError, Result};
