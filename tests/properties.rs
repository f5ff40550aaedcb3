//! Property checks over the public analysis API.

use proptest::prelude::*;
use verbatim::{MatchConfig, Matcher, analyze, partition, tokenize};

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-eA-E]{1,4}", 0..12).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn analysis_is_deterministic(input in words(), reference in words()) {
        prop_assert_eq!(analyze(&input, &reference), analyze(&input, &reference));
    }

    #[test]
    fn few_shared_tokens_never_flag(input in words(), reference in words()) {
        let result = analyze(&input, &reference);
        if partition(&input, &tokenize(&reference)).found.len() <= 4 {
            prop_assert!(!result.is_suspected_copy);
        }
    }

    #[test]
    fn every_reference_token_is_classified(input in words(), reference in words()) {
        let tokens = tokenize(&reference);
        let split = partition(&input, &tokens);
        for token in &tokens {
            let key = verbatim::normalize_token(&token.text);
            prop_assert!(split.found.contains(&key) ^ split.not_found.contains(&key));
        }
    }

    #[test]
    fn longer_input_keeps_found_tokens(input in words(), extra in words(), reference in words()) {
        let tokens = tokenize(&reference);
        let shorter = partition(&input, &tokens);
        let longer = partition(&format!("{input} {extra}"), &tokens);
        for token in &shorter.found {
            prop_assert!(longer.found.contains(token));
        }
    }

    #[test]
    fn stricter_floor_never_adds_flags(input in words(), reference in words()) {
        let strict = Matcher::new(MatchConfig { min_equal_tokens: 8, ..MatchConfig::default() })
            .expect("valid config");
        if strict.analyze(&input, &reference).is_suspected_copy {
            prop_assert!(analyze(&input, &reference).is_suspected_copy);
        }
    }
}

#[test]
fn empty_inputs_never_panic() {
    for (input, reference) in [("", ""), ("", "a b"), ("a b", ""), (" ", " "), ("  ", "a  b")] {
        let result = analyze(input, reference);
        assert!(!result.is_suspected_copy);
    }
}
