use std::{fmt, io};

/// Crate-wide `Result` type using [`MulticompleteError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, MulticompleteError>;

/// Top-level error type for multicomplete operations.
///
/// This type wraps the more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum MulticompleteError {
    /// Token completion errors.
    Completion(CompletionError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Errors raised by the token engine when applying a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The current token is longer than the text before the cursor.
    InvalidReplacementState { token_len: usize, cursor: usize },

    /// A completion was accepted while no token is open under the cursor.
    NoActiveToken,
}

/// Configuration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Separator is empty, longer than one character, or a control character.
    InvalidSeparator(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MulticompleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MulticompleteError::Completion(e) => write!(f, "Completion error: {e}"),
            MulticompleteError::Config(e) => write!(f, "Configuration error: {e}"),
            MulticompleteError::Io(e) => write!(f, "I/O error: {e}"),
            MulticompleteError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::InvalidReplacementState { token_len, cursor } => write!(
                f,
                "Invalid replacement state: token of {token_len} characters exceeds cursor {cursor}"
            ),
            CompletionError::NoActiveToken => write!(f, "No active token under the cursor"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidSeparator(sep) => write!(
                f,
                "Invalid separator {sep:?}: expected exactly one printable character"
            ),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for MulticompleteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MulticompleteError::Completion(e) => Some(e),
            MulticompleteError::Config(e) => Some(e),
            MulticompleteError::Io(e) => Some(e),
            MulticompleteError::Generic(_) => None,
        }
    }
}
impl std::error::Error for CompletionError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to MulticompleteError ========================= */

impl From<io::Error> for MulticompleteError {
    fn from(err: io::Error) -> Self {
        MulticompleteError::Io(err)
    }
}

impl From<CompletionError> for MulticompleteError {
    fn from(err: CompletionError) -> Self {
        MulticompleteError::Completion(err)
    }
}

impl From<ConfigError> for MulticompleteError {
    fn from(err: ConfigError) -> Self {
        MulticompleteError::Config(err)
    }
}

impl From<toml::de::Error> for MulticompleteError {
    fn from(err: toml::de::Error) -> Self {
        MulticompleteError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for MulticompleteError {
    fn from(err: toml::ser::Error) -> Self {
        MulticompleteError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<serde_json::Error> for MulticompleteError {
    fn from(err: serde_json::Error) -> Self {
        MulticompleteError::Generic(format!("JSON error: {err}"))
    }
}

impl From<reedline::ReedlineError> for MulticompleteError {
    fn from(err: reedline::ReedlineError) -> Self {
        MulticompleteError::Generic(format!("Line editor error: {err}"))
    }
}

impl From<String> for MulticompleteError {
    fn from(msg: String) -> Self {
        MulticompleteError::Generic(msg)
    }
}

impl From<&str> for MulticompleteError {
    fn from(msg: &str) -> Self {
        MulticompleteError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::InvalidReplacementState {
            token_len: 4,
            cursor: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid replacement state: token of 4 characters exceeds cursor 2"
        );
        assert_eq!(
            MulticompleteError::from(CompletionError::NoActiveToken).to_string(),
            "Completion error: No active token under the cursor"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err: MulticompleteError = ConfigError::InvalidSeparator(String::new()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid separator \"\": expected exactly one printable character"
        );
    }

    #[test]
    fn test_generic_conversions() {
        assert!(matches!(
            MulticompleteError::from("boom"),
            MulticompleteError::Generic(ref m) if m == "boom"
        ));
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(matches!(
            MulticompleteError::from(io_err),
            MulticompleteError::Io(_)
        ));
    }
}
