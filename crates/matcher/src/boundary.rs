//! Boundary phrases around the first matched input token.
//!
//! The heuristic looks at the reference text on either side of where the
//! input starts to match. Offsets are byte offsets from `str::find`, so every
//! slice taken here lands on a char boundary.

use crate::types::{BoundaryScan, TrailingMode, NO_BOUNDARY};

/// Offset of the first token, in iteration order, whose first exact
/// occurrence in `text` starts past offset zero.
///
/// Tokens that are absent, or that only occur at the very start of `text`,
/// are skipped. Returns `None` when no token qualifies.
pub fn first_positive_offset<T: AsRef<str>>(tokens: &[T], text: &str) -> Option<usize> {
    tokens.iter().find_map(|token| positive_offset(token.as_ref(), text))
}

/// Same rule as [`first_positive_offset`], scanning `tokens` from the end.
pub fn last_positive_offset<T: AsRef<str>>(tokens: &[T], text: &str) -> Option<usize> {
    tokens
        .iter()
        .rev()
        .find_map(|token| positive_offset(token.as_ref(), text))
}

fn positive_offset(token: &str, text: &str) -> Option<usize> {
    text.find(token).filter(|&offset| offset > 0)
}

/// The reference before `offset`, or [`NO_BOUNDARY`].
pub fn leading_text(reference: &str, offset: Option<usize>) -> &str {
    match offset {
        Some(offset) => &reference[..offset],
        None => NO_BOUNDARY,
    }
}

/// The trailing boundary phrase for `offset` under `mode`, or
/// [`NO_BOUNDARY`].
pub fn trailing_text(reference: &str, offset: Option<usize>, mode: TrailingMode) -> &str {
    match (offset, mode) {
        (None, _) => NO_BOUNDARY,
        (Some(offset), TrailingMode::CharsetTrim) => trim_reference_charset(reference, offset),
        (Some(offset), TrailingMode::Slice) => &reference[offset..],
    }
}

/// Strips from both ends of `reference` every char that occurs anywhere in
/// `reference[..offset]`.
///
/// This is a character-set trim, not a prefix removal: with a prefix of
/// `"the "` a reference ending in `"...three"` loses its final `"ee"` too.
/// [`TrailingMode::Slice`] gives the text after the offset instead.
pub fn trim_reference_charset(reference: &str, offset: usize) -> &str {
    let cutset = &reference[..offset];
    reference.trim_matches(|c: char| cutset.contains(c))
}

/// Offsets and phrases located for one input/reference pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries<'a> {
    pub first_offset: Option<usize>,
    pub last_offset: Option<usize>,
    pub leading: &'a str,
    pub trailing: &'a str,
}

impl<'a> Boundaries<'a> {
    /// Locates both boundary phrases of `reference` for `input_tokens`.
    pub fn locate<T: AsRef<str>>(
        input_tokens: &[T],
        reference: &'a str,
        scan: BoundaryScan,
        mode: TrailingMode,
    ) -> Self {
        let first_offset = first_positive_offset(input_tokens, reference);
        let last_offset = match scan {
            BoundaryScan::Forward => first_offset,
            BoundaryScan::Reverse => last_positive_offset(input_tokens, reference),
        };

        Self {
            first_offset,
            last_offset,
            leading: leading_text(reference, first_offset),
            trailing: trailing_text(reference, last_offset, mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offset_skips_tokens_at_start() {
        let reference = "the quick brown fox jumps over";
        let offset = first_positive_offset(&["the ", "quick ", "brown "], reference);
        assert_eq!(offset, Some(4));
    }

    #[test]
    fn first_offset_skips_missing_tokens() {
        let offset = first_positive_offset(&["zebra ", "fox"], "the quick brown fox");
        assert_eq!(offset, Some(16));
    }

    #[test]
    fn first_offset_is_exact_and_case_sensitive() {
        assert_eq!(first_positive_offset(&["Fox"], "the fox"), None);
        assert_eq!(first_positive_offset(&["fox"], "the fox"), Some(4));
    }

    #[test]
    fn no_positive_offset() {
        assert_eq!(first_positive_offset(&["", "the "], "the end"), None);
        assert_eq!(first_positive_offset::<&str>(&[], "anything"), None);
    }

    #[test]
    fn last_offset_scans_from_the_end() {
        let tokens = ["brown ", "fox ", "jumps"];
        let reference = "the quick brown fox jumps over";
        assert_eq!(first_positive_offset(&tokens, reference), Some(10));
        assert_eq!(last_positive_offset(&tokens, reference), Some(20));
    }

    #[test]
    fn leading_text_or_sentinel() {
        assert_eq!(leading_text("the quick fox", Some(4)), "the ");
        assert_eq!(leading_text("the quick fox", None), "#");
    }

    #[test]
    fn charset_trim_removes_chars_not_prefix() {
        assert_eq!(
            trim_reference_charset("the quick brown fox jumps over", 4),
            "quick brown fox jumps over"
        );
        assert_eq!(trim_reference_charset("abc xyz cba", 4), "xyz");
        assert_eq!(
            trailing_text("abc xyz cba", Some(4), TrailingMode::Slice),
            "xyz cba"
        );
    }

    #[test]
    fn trailing_sentinel_without_offset() {
        assert_eq!(trailing_text("abc", None, TrailingMode::CharsetTrim), "#");
        assert_eq!(trailing_text("abc", None, TrailingMode::Slice), "#");
    }

    #[test]
    fn forward_scan_uses_one_offset_for_both_phrases() {
        let tokens = ["brown ", "fox ", "jumps"];
        let reference = "the quick brown fox jumps over";
        let found = Boundaries::locate(
            &tokens,
            reference,
            BoundaryScan::Forward,
            TrailingMode::Slice,
        );
        assert_eq!(found.first_offset, Some(10));
        assert_eq!(found.last_offset, Some(10));
        assert_eq!(found.leading, "the quick ");
        assert_eq!(found.trailing, "brown fox jumps over");
    }

    #[test]
    fn reverse_scan_moves_trailing_phrase() {
        let tokens = ["brown ", "fox ", "jumps"];
        let reference = "the quick brown fox jumps over";
        let found = Boundaries::locate(
            &tokens,
            reference,
            BoundaryScan::Reverse,
            TrailingMode::Slice,
        );
        assert_eq!(found.leading, "the quick ");
        assert_eq!(found.trailing, "jumps over");
    }

    #[test]
    fn multibyte_offsets_slice_cleanly() {
        let reference = "caf\u{00E9} cr\u{00E8}me br\u{00FB}l\u{00E9}e";
        let found = Boundaries::locate(
            &["cr\u{00E8}me "],
            reference,
            BoundaryScan::Forward,
            TrailingMode::CharsetTrim,
        );
        assert_eq!(found.leading, "caf\u{00E9} ");
        assert_eq!(found.trailing, "r\u{00E8}me br\u{00FB}l\u{00E9}e");
    }
}
