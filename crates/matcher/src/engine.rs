use std::time::Instant;

use canonical::{count_tokens, partition, tokenize, Token, TokenPartition};
use serde::Serialize;

use crate::boundary::Boundaries;
use crate::metrics::metrics_recorder;
use crate::types::{DiagnosticBundle, MatchConfig, MatchError, MatchResult, TextSpan};


/// Decides whether an input text is a near-verbatim excerpt of a reference.
///
/// A `Matcher` only holds its configuration, so one instance can be shared
/// across threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher from a validated configuration.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Analyze `input` against `reference` and return every match found.
    ///
    /// The heuristic reports on the texts as a whole, so this currently holds
    /// exactly one record.
    pub fn analyze_all(&self, input: &str, reference: &str) -> Vec<MatchResult> {
        vec![self.analyze(input, reference)]
    }

    /// Analyze `input` against `reference`.
    ///
    /// The input is flagged when a boundary phrase of the reference around the
    /// first matched input token is longer than `min_phrase_tokens` and does
    /// not survive among the reference tokens the input lacks, provided more
    /// than `min_equal_tokens` distinct reference tokens occur in the input.
    pub fn analyze(&self, input: &str, reference: &str) -> MatchResult {
        let start = Instant::now();

        let input_tokens = tokenize(input);
        let reference_tokens = tokenize(reference);
        let split = partition(input, &reference_tokens);
        let bounds = Boundaries::locate(
            &input_tokens,
            reference,
            self.cfg.boundary_scan,
            self.cfg.trailing_mode,
        );

        let is_suspected_copy = self.verdict(&split, &bounds);

        tracing::debug!(
            input_tokens = input_tokens.len(),
            reference_tokens = reference_tokens.len(),
            equal_tokens = split.found.len(),
            diff_tokens = split.not_found.len(),
            first_offset = ?bounds.first_offset,
            last_offset = ?bounds.last_offset,
            suspected_copy = is_suspected_copy,
            "analysis complete"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_analysis(start.elapsed(), is_suspected_copy, split.found.len());
        }

        MatchResult {
            input: TextSpan::whole(input),
            reference: TextSpan::whole(reference),
            diagnostics: diagnostics(&input_tokens, &reference_tokens, &split.found),
            is_suspected_copy,
        }
    }

    fn verdict(&self, split: &TokenPartition, bounds: &Boundaries<'_>) -> bool {
        // Too little overlap to call anything a copy.
        if split.found.len() <= self.cfg.min_equal_tokens {
            return false;
        }

        let long_phrase = count_tokens(bounds.leading) > self.cfg.min_phrase_tokens
            || count_tokens(bounds.trailing) > self.cfg.min_phrase_tokens;
        if !long_phrase {
            return false;
        }

        let diff_text = split.not_found.join(" ");
        !diff_text.contains(bounds.leading) || !diff_text.contains(bounds.trailing)
    }
}

/// Analyze `input` against `reference` with the default configuration.
pub fn analyze(input: &str, reference: &str) -> MatchResult {
    Matcher::default().analyze(input, reference)
}

fn diagnostics(input: &[Token], reference: &[Token], equal: &[String]) -> DiagnosticBundle {
    let (reference_tokens_json, reference_error) = encode(&token_texts(reference));
    let (input_tokens_json, input_error) = encode(&token_texts(input));
    let (equal_tokens_json, equal_error) = encode(equal);

    DiagnosticBundle {
        reference_tokens_json,
        input_tokens_json,
        equal_tokens_json,
        reference_error,
        input_error,
        equal_error,
    }
}

fn token_texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn encode<T: Serialize + ?Sized>(value: &T) -> (String, Option<String>) {
    match serde_json::to_string(value) {
        Ok(json) => (json, None),
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode diagnostic token list");
            (String::new(), Some(err.to_string()))
        }
    }
}
