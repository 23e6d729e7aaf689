//! Token separator
//!
//! A separator is a single printable character dividing the buffer into
//! tokens. Construction validates the character so that an engine can never
//! hold a separator it cannot split on.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// Delimiter character between tokens (default: `,`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separator(char);

impl Separator {
    /// The comma separator used when nothing else is configured
    pub const COMMA: Separator = Separator(',');

    /// Create a separator from a character
    ///
    /// # Errors
    /// * `ConfigError::InvalidSeparator` - if `ch` is a control character
    pub fn new(ch: char) -> Result<Self, ConfigError> {
        if ch.is_control() {
            return Err(ConfigError::InvalidSeparator(ch.to_string()));
        }
        Ok(Self(ch))
    }

    /// Parse a separator from its textual form
    ///
    /// The text must hold exactly one character.
    ///
    /// # Errors
    /// * `ConfigError::InvalidSeparator` - if `text` is empty, has more than
    ///   one character, or is a control character
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(ConfigError::InvalidSeparator(text.to_string())),
        }
    }

    /// The separator character
    pub fn as_char(self) -> char {
        self.0
    }

    /// Text appended after an accepted completion: the separator and one space
    pub fn completion_suffix(self) -> String {
        let mut suffix = String::with_capacity(2);
        suffix.push(self.0);
        suffix.push(' ');
        suffix
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::COMMA
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Separator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Separator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Separator::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_comma() {
        assert_eq!(Separator::default().as_char(), ',');
        assert_eq!(Separator::default().completion_suffix(), ", ");
    }

    #[test]
    fn test_parse_single_char() {
        assert_eq!(Separator::parse(";").unwrap().as_char(), ';');
        assert_eq!(Separator::parse("、").unwrap().as_char(), '、');
    }

    #[test]
    fn test_parse_rejects_empty_and_long() {
        assert_eq!(
            Separator::parse(""),
            Err(ConfigError::InvalidSeparator(String::new()))
        );
        assert!(Separator::parse(", ").is_err());
    }

    #[test]
    fn test_rejects_control_chars() {
        assert!(Separator::new('\n').is_err());
        assert!(Separator::new('\t').is_err());
        assert!(Separator::new(' ').is_ok());
    }
}
