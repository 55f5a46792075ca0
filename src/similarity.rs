//! Token-set text similarity
//!
//! Leaf dependency of candidate scoring and episode verification. Similarity
//! is the Jaccard index over whitespace-separated token sets: case-sensitive,
//! no stemming, order-insensitive. This deliberately favors word overlap over
//! edit distance, since podcast titles are reordered and truncated across
//! directories far more often than they are misspelled.

use std::collections::HashSet;

/// Compute token-set (Jaccard) similarity between two strings
///
/// Splits both inputs on whitespace into token sets and returns
/// `|A ∩ B| / |A ∪ B|` in `[0, 1]`.
///
/// Special cases: two empty inputs are considered identical (1.0); exactly one
/// empty input shares nothing with the other (0.0).
#[must_use]
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();

    intersection as f64 / union as f64
}
