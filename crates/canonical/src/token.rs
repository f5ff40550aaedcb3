use serde::{Deserialize, Serialize};

/// The separator tokens are split after.
pub const SEPARATOR: char = ' ';

/// A token with its UTF-8 byte offsets in the source text.
///
/// `text` keeps its trailing separator, so concatenating the texts of all
/// tokens returned by [`tokenize`] reproduces the input exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text, trailing space included.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits `text` after every ASCII space.
///
/// Every token except possibly the last keeps its trailing space. Consecutive
/// spaces produce single-space tokens, a trailing space produces a final empty
/// token, and the empty string produces exactly one empty token. Nothing is
/// trimmed or case-folded here.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(count_tokens(text));
    let mut start = 0;

    for (idx, _) in text.match_indices(SEPARATOR) {
        let end = idx + SEPARATOR.len_utf8();
        tokens.push(Token {
            text: text[start..end].to_string(),
            start,
            end,
        });
        start = end;
    }

    tokens.push(Token {
        text: text[start..].to_string(),
        start,
        end: text.len(),
    });

    tokens
}

/// Number of tokens [`tokenize`] would produce, without allocating them.
pub fn count_tokens(text: &str) -> usize {
    text.matches(SEPARATOR).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn keeps_trailing_separator() {
        assert_eq!(texts("the quick fox"), vec!["the ", "quick ", "fox"]);
    }

    #[test]
    fn empty_input_yields_one_empty_token() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 0));
    }

    #[test]
    fn trailing_space_yields_empty_last_token() {
        assert_eq!(texts("the "), vec!["the ", ""]);
    }

    #[test]
    fn repeated_spaces_become_space_tokens() {
        assert_eq!(texts("a  b"), vec!["a ", " ", "b"]);
    }

    #[test]
    fn only_ascii_space_separates() {
        assert_eq!(texts("a\tb\nc d"), vec!["a\tb\nc ", "d"]);
    }

    #[test]
    fn offsets_cover_source() {
        let text = "caf\u{00E9} au lait";
        let tokens = tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens.last().map(|t| t.end), Some(text.len()));
    }

    #[test]
    fn count_matches_tokenize() {
        for text in ["", " ", "a", "a b", "a  b ", "one two three four five"] {
            assert_eq!(count_tokens(text), tokenize(text).len(), "text={text:?}");
        }
    }
}
