//! Token normalization used for comparison only.
//!
//! Normalized forms never leak into output text; they key the ordered sets
//! built by [`partition`](crate::partition).

use crate::token::SEPARATOR;

/// Folds `text` to lower case one char at a time.
///
/// The mapping is context-free, so folding a substring gives the same result
/// as taking the matching substring of the folded text. `str::to_lowercase`
/// treats a word-final sigma specially and loses that property.
///
/// Each char maps to exactly one char: where the full lower-case mapping
/// expands (`'İ'` becomes `"i\u{307}"`), only its first char is kept.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Trims ASCII spaces from both ends of `token` and folds it to lower case.
///
/// Other whitespace (tabs, newlines) is left alone.
pub fn normalize_token(token: &str) -> String {
    fold_case(token.trim_matches(SEPARATOR))
}
