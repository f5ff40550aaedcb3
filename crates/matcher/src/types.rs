use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel boundary phrase used when no input token occurs past the start of
/// the reference.
pub const NO_BOUNDARY: &str = "#";

/// How the offset behind the trailing boundary phrase is located.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryScan {
    /// Reuse the forward scan for both boundaries, so the leading and trailing
    /// phrases are cut at the same offset.
    #[default]
    Forward,
    /// Scan the input tokens from the end for the trailing boundary.
    Reverse,
}

/// How the trailing boundary phrase is carved out of the reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrailingMode {
    /// Strip, from both ends of the reference, every char that occurs in the
    /// reference prefix before the offset.
    #[default]
    CharsetTrim,
    /// Take the reference from the offset to the end.
    Slice,
}

/// Tuning knobs for the excerpt heuristic.
///
/// The defaults reproduce the verdicts of the deployed service; change the
/// boundary options only when comparing behaviours deliberately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: String,
    /// A boundary phrase must have strictly more tokens than this to be
    /// considered at all.
    #[serde(default = "MatchConfig::default_min_phrase_tokens")]
    pub min_phrase_tokens: usize,
    /// The verdict is forced to `false` unless strictly more distinct
    /// reference tokens than this occur in the input.
    #[serde(default = "MatchConfig::default_min_equal_tokens")]
    pub min_equal_tokens: usize,
    /// Offset used for the trailing boundary phrase.
    #[serde(default)]
    pub boundary_scan: BoundaryScan,
    /// How the trailing boundary phrase is cut.
    #[serde(default)]
    pub trailing_mode: TrailingMode,
}

impl MatchConfig {
    pub(crate) fn default_version() -> String {
        "v1".to_string()
    }

    pub(crate) fn default_min_phrase_tokens() -> usize {
        4
    }

    pub(crate) fn default_min_equal_tokens() -> usize {
        4
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            min_phrase_tokens: Self::default_min_phrase_tokens(),
            min_equal_tokens: Self::default_min_equal_tokens(),
            boundary_scan: BoundaryScan::default(),
            trailing_mode: TrailingMode::default(),
        }
    }
}

/// A contiguous region of a document.
///
/// `start_index` and `end_index` are byte offsets and both inclusive, so the
/// span of an empty document is `0..=-1`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub start_index: i64,
    pub end_index: i64,
}

impl TextSpan {
    /// Span covering all of `text`.
    pub fn whole(text: &str) -> Self {
        Self {
            text: text.to_string(),
            start_index: 0,
            end_index: text.len() as i64 - 1,
        }
    }
}

/// JSON echoes of the intermediate token lists.
///
/// Kept for debugging only; the verdict never reads them. A list that failed
/// to encode is left empty and its `*_error` field carries the reason.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticBundle {
    /// Raw reference tokens, trailing spaces included.
    pub reference_tokens_json: String,
    /// Raw input tokens, trailing spaces included.
    pub input_tokens_json: String,
    /// Normalized reference tokens that occur in the input.
    pub equal_tokens_json: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal_error: Option<String>,
}

impl DiagnosticBundle {
    /// Returns true when every list encoded cleanly.
    pub fn is_complete(&self) -> bool {
        self.reference_error.is_none() && self.input_error.is_none() && self.equal_error.is_none()
    }
}

/// The outcome of one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub input: TextSpan,
    pub reference: TextSpan,
    pub diagnostics: DiagnosticBundle,
    /// Whether the input looks like a contiguous lift from the reference.
    pub is_suspected_copy: bool,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
