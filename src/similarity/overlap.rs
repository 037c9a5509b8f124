//! Shared-token overlap similarity, weighted by character length.
//!
//! Measures how much of the first input's text is made of tokens that also
//! appear in the second input, relative to the shorter input's total length:
//!
//! ```text
//! similarity = shared_length / min(length1, length2)
//! ```
//!
//! Lengths are character counts, so every script weighs the same per
//! character regardless of UTF-8 width.
//!
//! # Examples
//!
//! ```
//! use textsim::analysis::token::Token;
//! use textsim::similarity::{OverlapSimilarity, SimilarityMeasure};
//!
//! let words1 = vec![Token::new("deep", 0), Token::new("work", 1)];
//! let words2 = vec![Token::new("deep", 0), Token::new("dive", 1)];
//!
//! let score = OverlapSimilarity::new().score_tokens(&words1, &words2);
//! assert!((score - 0.5).abs() < 1e-9);
//! ```

use ahash::AHashSet;
use log::debug;
use rayon::prelude::*;

use crate::analysis::token::Token;
use crate::similarity::SimilarityMeasure;

/// Below this many token occurrences the sums run sequentially.
const PARALLEL_CUTOFF: usize = 4096;

/// Shared-token overlap measure.
///
/// The numerator always scans the first list's occurrences against the
/// second list's membership set: a token repeated in the first list counts
/// its length once per occurrence as long as its value appears anywhere in
/// the second list. The denominator is the smaller of the two total
/// character lengths. Downstream scores depend on this one-sided numerator,
/// so it is not replaced with a symmetric intersection count; with skewed
/// duplicate multiplicities the score is asymmetric and can exceed 1.0.
///
/// When both inputs are empty the division is 0/0 and the result is NaN,
/// returned as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlapSimilarity;

impl OverlapSimilarity {
    /// Create a new overlap similarity measure.
    pub fn new() -> Self {
        OverlapSimilarity
    }
}

impl SimilarityMeasure for OverlapSimilarity {
    fn score_tokens(&self, words1: &[Token], words2: &[Token]) -> f64 {
        // The three sums are independent of each other.
        let words1_length = total_char_len(words1);
        let words2_length = total_char_len(words2);

        let words2_set: AHashSet<&Token> = words2.iter().collect();
        let intersection_length: u64 = if words1.len() >= PARALLEL_CUTOFF {
            words1
                .par_iter()
                .filter(|word| words2_set.contains(*word))
                .map(|word| word.char_len() as u64)
                .sum()
        } else {
            words1
                .iter()
                .filter(|word| words2_set.contains(*word))
                .map(|word| word.char_len() as u64)
                .sum()
        };

        let score = intersection_length as f64 / words1_length.min(words2_length) as f64;

        debug!("total character length of the first word list: {words1_length}");
        debug!("total character length of the second word list: {words2_length}");
        debug!("shared character length: {intersection_length}");
        debug!(
            "similarity score: {intersection_length}/min({words1_length}, {words2_length}) = {score}"
        );

        score
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

/// Total character length of a token list, every occurrence counted.
fn total_char_len(words: &[Token]) -> u64 {
    if words.len() >= PARALLEL_CUTOFF {
        words.par_iter().map(|word| word.char_len() as u64).sum()
    } else {
        words.iter().map(|word| word.char_len() as u64).sum()
    }
}
