//! # Verbatim Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides whether an input text looks like a near-verbatim excerpt
//! lifted from a reference text, as opposed to a passage that merely shares
//! some vocabulary with it. It sits on top of the tokenization layer
//! (`canonical`) and is called by the HTTP layer (`server`) with two plain
//! strings.
//!
//! ## How the verdict is reached
//!
//! 1. Both texts are tokenized after every space.
//! 2. The reference tokens are partitioned by whether they occur in the input
//!    ("equal" tokens) or not ("diff" tokens).
//! 3. The reference is cut at the first input token found past its start,
//!    giving a leading and a trailing boundary phrase.
//! 4. If either phrase is longer than `min_phrase_tokens` and is missing from
//!    the space-joined diff tokens, the input is a suspected copy.
//! 5. Unless no more than `min_equal_tokens` distinct reference tokens occur in
//!    the input, in which case it never is.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: thresholds plus the [`BoundaryScan`] and
//!   [`TrailingMode`] switches.
//! - [`MatchResult`]: spans for both texts, a [`DiagnosticBundle`] and the
//!   verdict.
//! - [`Matcher`]: holds a validated config and runs analyses.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, MatchConfig};
//!
//! let matcher = Matcher::new(MatchConfig::default()).expect("valid config");
//! let reference = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
//!
//! let lifted = matcher.analyze("foxtrot golf hotel india juliet kilo", reference);
//! assert!(lifted.is_suspected_copy);
//!
//! let unrelated = matcher.analyze("red green blue", reference);
//! assert!(!unrelated.is_suspected_copy);
//! ```
//!
//! ## Observability
//!
//! Every analysis emits a `tracing` debug event. Install a [`MatchMetrics`]
//! implementation via [`set_match_metrics`] to record latency and verdicts.

pub mod boundary;
pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{analyze, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{
    BoundaryScan, DiagnosticBundle, MatchConfig, MatchError, MatchResult, TextSpan, TrailingMode,
    NO_BOUNDARY,
};
