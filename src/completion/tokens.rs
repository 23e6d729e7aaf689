//! Splitting a buffer into its list of entered tokens

use super::separator::Separator;

/// Split `text` into the ordered list of entered tokens
///
/// A trailing run of separators and spaces is dropped first, then every
/// `"<separator><space>"` pair counts as a single split point. Each token is
/// trimmed of surrounding whitespace. Empty input yields an empty list;
/// interior empty tokens (`"a,,b"`) are kept.
pub fn extract_token_list(text: &str, separator: Separator) -> Vec<String> {
    let sep = separator.as_char();
    let trimmed = text.trim_end_matches(|c: char| c == sep || c == ' ');
    if trimmed.is_empty() {
        return Vec::new();
    }

    let collapsed = trimmed.replace(&separator.completion_suffix(), &sep.to_string());
    let tokens: Vec<String> = collapsed
        .split(sep)
        .map(|token| token.trim().to_string())
        .collect();

    tracing::trace!(count = tokens.len(), "extracted token list");
    tokens
}
