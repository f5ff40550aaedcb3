use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::normalize::{fold_case, normalize_token};

/// Candidate tokens split by whether they occur in a subject text.
///
/// Both sides hold normalized tokens in first-seen order with duplicates
/// removed. The two sides are disjoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPartition {
    /// Normalized candidates that occur somewhere in the subject.
    pub found: Vec<String>,
    /// Normalized candidates that do not occur in the subject.
    pub not_found: Vec<String>,
}

impl TokenPartition {
    /// Number of distinct normalized candidates across both sides.
    pub fn distinct_len(&self) -> usize {
        self.found.len() + self.not_found.len()
    }
}

/// Partitions `candidates` by case-insensitive substring occurrence in
/// `subject`.
///
/// Each candidate is normalized with [`normalize_token`] and looked up in the
/// case-folded subject. An empty normalized token occurs in every subject and
/// always lands in `found`.
pub fn partition<T: AsRef<str>>(subject: &str, candidates: &[T]) -> TokenPartition {
    let folded_subject = fold_case(subject);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out = TokenPartition::default();

    for candidate in candidates {
        let normalized = normalize_token(candidate.as_ref());
        if seen.contains(&normalized) {
            continue;
        }
        seen.insert(normalized.clone());

        if folded_subject.contains(normalized.as_str()) {
            out.found.push(normalized);
        } else {
            out.not_found.push(normalized);
        }
    }

    out
}
