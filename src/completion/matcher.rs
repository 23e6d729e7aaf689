//! Vocabulary matching
//!
//! Candidate filtering is a pure function of the prefix, the vocabulary and
//! the two matching options. A fresh filtered view is built for every prefix
//! instead of narrowing a previous result, so callers can recompute it on
//! each keystroke.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a candidate is tested against the current token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Candidate must start with the token
    #[default]
    #[serde(rename = "prefix")]
    PrefixAtTokenStart,
    /// Candidate may contain the token anywhere
    #[serde(rename = "substring")]
    SubstringAnywhere,
}

/// Whether matching distinguishes letter case
///
/// Only affects comparison; stored text is never folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    Sensitive,
    #[default]
    Insensitive,
}

impl MatchMode {
    /// Test a single candidate against an already folded needle
    fn test(self, candidate: &str, needle: &str) -> bool {
        match self {
            MatchMode::PrefixAtTokenStart => candidate.starts_with(needle),
            MatchMode::SubstringAnywhere => candidate.contains(needle),
        }
    }
}

impl CaseSensitivity {
    /// Text as compared under this sensitivity
    pub fn fold(self, text: &str) -> Cow<'_, str> {
        match self {
            CaseSensitivity::Sensitive => Cow::Borrowed(text),
            CaseSensitivity::Insensitive => Cow::Owned(text.to_lowercase()),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::PrefixAtTokenStart => write!(f, "prefix"),
            MatchMode::SubstringAnywhere => write!(f, "substring"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefix" => Ok(MatchMode::PrefixAtTokenStart),
            "substring" | "anypos" | "any" => Ok(MatchMode::SubstringAnywhere),
            _ => Err(ConfigError::InvalidValue {
                field: "match_mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseSensitivity::Sensitive => write!(f, "sensitive"),
            CaseSensitivity::Insensitive => write!(f, "insensitive"),
        }
    }
}

impl FromStr for CaseSensitivity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sensitive" => Ok(CaseSensitivity::Sensitive),
            "insensitive" => Ok(CaseSensitivity::Insensitive),
            _ => Err(ConfigError::InvalidValue {
                field: "case_sensitivity".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Lazy view over the vocabulary entries matching a prefix
///
/// Clone an unconsumed view to walk the matches again.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    items: std::slice::Iter<'a, String>,
    needle: String,
    mode: MatchMode,
    case: CaseSensitivity,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = &self.needle;
        let (mode, case) = (self.mode, self.case);
        self.items
            .by_ref()
            .find(|item| needle.is_empty() || mode.test(&case.fold(item), needle))
            .map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

/// Filter `vocabulary` against `prefix`, preserving vocabulary order
///
/// An empty prefix yields the whole vocabulary. Duplicate entries are
/// yielded as many times as they occur.
pub fn filter_vocabulary<'a>(
    prefix: &str,
    vocabulary: &'a [String],
    mode: MatchMode,
    case: CaseSensitivity,
) -> Candidates<'a> {
    Candidates {
        items: vocabulary.iter(),
        needle: case.fold(prefix).into_owned(),
        mode,
        case,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_sensitive() {
        let v = vocab(&["Monday", "monsoon", "Tuesday"]);
        let got: Vec<_> =
            filter_vocabulary("Mon", &v, MatchMode::PrefixAtTokenStart, CaseSensitivity::Sensitive)
                .collect();
        assert_eq!(got, vec!["Monday"]);
    }

    #[test]
    fn test_prefix_insensitive() {
        let v = vocab(&["Monday", "monsoon", "Tuesday"]);
        let got: Vec<_> = filter_vocabulary(
            "MON",
            &v,
            MatchMode::PrefixAtTokenStart,
            CaseSensitivity::Insensitive,
        )
        .collect();
        assert_eq!(got, vec!["Monday", "monsoon"]);
    }

    #[test]
    fn test_substring_insensitive_preserves_order() {
        let v = vocab(&["Monday", "Sunday"]);
        let got: Vec<_> = filter_vocabulary(
            "day",
            &v,
            MatchMode::SubstringAnywhere,
            CaseSensitivity::Insensitive,
        )
        .collect();
        assert_eq!(got, vec!["Monday", "Sunday"]);
    }

    #[test]
    fn test_substring_sensitive() {
        let v = vocab(&["Monday", "DAYS"]);
        let got: Vec<_> =
            filter_vocabulary("day", &v, MatchMode::SubstringAnywhere, CaseSensitivity::Sensitive)
                .collect();
        assert_eq!(got, vec!["Monday"]);
    }

    #[test]
    fn test_empty_prefix_yields_everything() {
        let v = vocab(&["b", "a", "b"]);
        let got: Vec<_> =
            filter_vocabulary("", &v, MatchMode::PrefixAtTokenStart, CaseSensitivity::Sensitive)
                .collect();
        assert_eq!(got, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_restartable_by_clone() {
        let v = vocab(&["alpha", "alps", "beta"]);
        let candidates =
            filter_vocabulary("al", &v, MatchMode::PrefixAtTokenStart, CaseSensitivity::Sensitive);
        let first: Vec<_> = candidates.clone().collect();
        let second: Vec<_> = candidates.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["alpha", "alps"]);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("prefix".parse::<MatchMode>(), Ok(MatchMode::PrefixAtTokenStart));
        assert_eq!("AnyPos".parse::<MatchMode>(), Ok(MatchMode::SubstringAnywhere));
        assert!("fuzzy".parse::<MatchMode>().is_err());
        assert_eq!(
            "Sensitive".parse::<CaseSensitivity>(),
            Ok(CaseSensitivity::Sensitive)
        );
        assert_eq!(MatchMode::SubstringAnywhere.to_string(), "substring");
    }

    #[test]
    fn test_sensitive_fold_borrows() {
        assert!(matches!(CaseSensitivity::Sensitive.fold("Monday"), Cow::Borrowed("Monday")));
        assert_eq!(CaseSensitivity::Insensitive.fold("MonDay"), "monday");
    }

}
