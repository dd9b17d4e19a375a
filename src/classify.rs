#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::Serialize;
use std::fmt;

/// What an unmatched token most resembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenClass {
    #[serde(rename = "option")]
    OptionLike,
    #[serde(rename = "subcommand")]
    SubcommandLike,
    #[serde(rename = "none")]
    Neither,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OptionLike => "option",
            Self::SubcommandLike => "subcommand",
            Self::Neither => "none",
        };
        write!(f, "{label}")
    }
}

const OPTION_MARKER: char = '-';

/// Signed integer and float literals are never unknown options; a token like
/// `-42` is a negative argument, not a typo. Any parse failure means
/// "not numeric" and classification continues.
fn is_numeric_literal(token: &str) -> bool {
    token.parse::<i64>().is_ok() || token.parse::<f64>().is_ok()
}

/// Length of the common leading-character run of `token` and `name`,
/// stopping at the first mismatch or when the shorter string ends.
fn common_prefix_len(token: &str, name: &str) -> usize {
    token
        .chars()
        .zip(name.chars())
        .take_while(|(a, b)| a == b)
        .count()
}

/// The aggregate prefix heuristic: sum the common-prefix run lengths across
/// every known option name (aliases counted separately) and require the sum
/// to reach at least 90% of the name count. This is intentionally not a
/// per-candidate best-match test; the sum over the whole pool is what gates
/// option-likeness.
fn resembles_option(token: &str, option_names: &[&str]) -> bool {
    if option_names.is_empty() {
        return token.starts_with(OPTION_MARKER);
    }
    let total_prefix_match: usize = option_names
        .iter()
        .map(|name| common_prefix_len(token, name))
        .sum();
    total_prefix_match > 0 && total_prefix_match * 10 >= option_names.len() * 9
}

/// Classify an unmatched `token` against the visible names of the active
/// command context. Hidden names must already be filtered out by the caller.
#[must_use]
pub fn classify(token: &str, option_names: &[&str], subcommand_names: &[&str]) -> TokenClass {
    if token.chars().count() == 1 {
        return TokenClass::Neither;
    }
    if is_numeric_literal(token) {
        return TokenClass::Neither;
    }
    let resembles = resembles_option(token, option_names);
    if !resembles && !subcommand_names.is_empty() {
        return TokenClass::SubcommandLike;
    }
    if resembles {
        TokenClass::OptionLike
    } else {
        TokenClass::Neither
    }
}
