#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use crate::similarity::similarity;
use itertools::Itertools;

/// Suggestion lists are truncated to this many entries.
pub const MAX_SUGGESTIONS: usize = 3;

/// Candidates must score strictly above the threshold to surface; the
/// default only discards zero-similarity candidates.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

/// Strip leading marker characters (anything before the first identifier
/// character) from an option token, so `--foa` is scored as `foa`. A token
/// with no identifier characters at all is returned unchanged.
#[must_use]
pub fn strip_markers(token: &str) -> &str {
    token
        .find(|c: char| c.is_alphanumeric() || c == '_')
        .map_or(token, |index| &token[index..])
}

/// Rank `candidates` by bigram-cosine similarity to `pattern`, keeping
/// scores strictly above `threshold`, ordered by descending score with
/// declaration order as the tie-break, truncated to [`MAX_SUGGESTIONS`].
///
/// Equal-score candidates all remain eligible (bounded by the cutoff); the
/// tie-break keeps the output deterministic for identical inputs.
#[must_use]
pub fn most_similar(pattern: &str, candidates: &[&str], threshold: f64) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| (similarity(pattern, candidate), index, *candidate))
        .filter(|(score, _, _)| *score > threshold)
        .sorted_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)))
        .take(MAX_SUGGESTIONS)
        .map(|(_, _, name)| name.to_string())
        .collect()
}
