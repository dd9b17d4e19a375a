#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashMap;

/// Frequency multiset of the contiguous 2-character substrings of `sequence`.
/// Strings shorter than two characters produce an empty map.
fn bigram_frequencies(sequence: &str) -> HashMap<[char; 2], u32> {
    let chars: Vec<char> = sequence.chars().collect();
    let mut frequencies = HashMap::new();
    for pair in chars.windows(2) {
        *frequencies.entry([pair[0], pair[1]]).or_insert(0u32) += 1;
    }
    frequencies
}

fn dot_product(a: &HashMap<[char; 2], u32>, b: &HashMap<[char; 2], u32>) -> f64 {
    a.iter()
        .map(|(gram, count)| f64::from(*count) * f64::from(b.get(gram).copied().unwrap_or(0)))
        .sum()
}

/// Cosine similarity of the bigram frequency vectors of two case-folded
/// strings, in `[0, 1]`. Either side lacking bigrams yields 0 rather than a
/// division by zero.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let vector_a = bigram_frequencies(&a.to_lowercase());
    let vector_b = bigram_frequencies(&b.to_lowercase());
    let norm = (dot_product(&vector_a, &vector_a) * dot_product(&vector_b, &vector_b)).sqrt();
    if norm > 0.0 {
        dot_product(&vector_a, &vector_b) / norm
    } else {
        0.0
    }
}
