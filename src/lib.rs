//! Workspace umbrella crate for verbatim excerpt detection.
//!
//! Re-exports the tokenization layer (`canonical`) and the matching layer
//! (`matcher`) behind one API, and adds YAML configuration loading.
//!
//! ```
//! use verbatim::{Matcher, VerbatimConfig};
//!
//! let config = VerbatimConfig::from_yaml("version: \"1.0\"\n").expect("config");
//! let matcher = Matcher::new(config.matcher).expect("matcher");
//!
//! let result = matcher.analyze(
//!     "foxtrot golf hotel india juliet kilo",
//!     "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima",
//! );
//! assert!(result.is_suspected_copy);
//! ```

pub mod config;

pub use canonical::{
    count_tokens, fold_case, normalize_token, partition, tokenize, Token, TokenPartition,
};
pub use config::{ConfigLoadError, VerbatimConfig};
pub use matcher::boundary::{
    first_positive_offset, last_positive_offset, leading_text, trailing_text,
    trim_reference_charset, Boundaries,
};
pub use matcher::{
    analyze, set_match_metrics, BoundaryScan, DiagnosticBundle, MatchConfig, MatchError,
    MatchMetrics, MatchResult, Matcher, TextSpan, TrailingMode, NO_BOUNDARY,
};
