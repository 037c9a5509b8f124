//! Cosine similarity over term-frequency vectors.
//!
//! Every distinct token across both inputs defines one vector dimension; the
//! component in that dimension is the token's occurrence count in that input
//! (0 if absent). The score is the cosine of the angle between the two
//! vectors:
//!
//! ```text
//! similarity = a·b / (|a| * |b|)
//! ```
//!
//! # Examples
//!
//! ```
//! use textsim::analysis::token::Token;
//! use textsim::similarity::{CosineSimilarity, SimilarityMeasure};
//!
//! let words1 = vec![Token::new("shared", 0), Token::new("one", 1)];
//! let words2 = vec![Token::new("shared", 0), Token::new("two", 1)];
//!
//! let score = CosineSimilarity::new().score_tokens(&words1, &words2);
//! assert!((score - 0.5).abs() < 1e-9);
//! ```

use log::debug;
use rayon::prelude::*;

use crate::analysis::token::Token;
use crate::similarity::SimilarityMeasure;
use crate::similarity::frequency::{self, FrequencyMap};

/// Below this many distinct terms the rayon fan-out costs more than it saves.
const PARALLEL_CUTOFF: usize = 1024;

/// Cosine similarity measure over term-frequency vectors.
///
/// Symmetric in its arguments, exactly 1.0 for token-identical inputs, and
/// 0.0 when no token is shared. When either input is empty the denominator
/// is zero and the result is NaN, returned as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    /// Create a new cosine similarity measure.
    pub fn new() -> Self {
        CosineSimilarity
    }
}

impl SimilarityMeasure for CosineSimilarity {
    fn score_tokens(&self, words1: &[Token], words2: &[Token]) -> f64 {
        let frequency1 = frequency::frequency(words1);
        let frequency2 = frequency::frequency(words2);

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "term frequencies of the first text:\n{}",
                frequency::format_frequency(&frequency1)
            );
            debug!(
                "term frequencies of the second text:\n{}",
                frequency::format_frequency(&frequency2)
            );
        }

        let (dot, norm1_sq, norm2_sq) = accumulate(&frequency1, &frequency2);

        // The squared norms are multiplied while still exact and rooted once,
        // so the denominator carries a single rounding. Token-identical
        // inputs land on exactly 1.0.
        let denominator = ((norm1_sq as f64) * (norm2_sq as f64)).sqrt();

        dot as f64 / denominator
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Accumulate the dot product and both squared norms as exact integers.
///
/// Iterating the first map covers every union dimension that contributes to
/// `dot` and `norm1_sq`; a token absent from the first map contributes 0 to
/// both. The second map supplies `norm2_sq` on its own.
fn accumulate(frequency1: &FrequencyMap<'_>, frequency2: &FrequencyMap<'_>) -> (u64, u64, u64) {
    if frequency1.len().max(frequency2.len()) >= PARALLEL_CUTOFF {
        // Integer addition is exact and associative, so the parallel
        // reduction equals the sequential sums.
        let (dot, norm1_sq) = frequency1
            .par_iter()
            .map(|(word, &x1)| {
                let x2 = frequency2.get(*word).copied().unwrap_or(0);
                (x1 * x2, x1 * x1)
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
        let norm2_sq = frequency2.par_iter().map(|(_, &x2)| x2 * x2).sum();
        (dot, norm1_sq, norm2_sq)
    } else {
        let mut dot = 0;
        let mut norm1_sq = 0;
        for (word, &x1) in frequency1.iter() {
            let x2 = frequency2.get(word).copied().unwrap_or(0);
            dot += x1 * x2;
            norm1_sq += x1 * x1;
        }
        let norm2_sq = frequency2.values().map(|&x2| x2 * x2).sum();
        (dot, norm1_sq, norm2_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list(texts: &[&str]) -> Vec<Token> {
        texts
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(*text, position))
            .collect()
    }

    #[test]
    fn test_identical_lists_score_exactly_one() {
        let words = word_list(&["we", "love", "rust", "rust"]);
        let score = CosineSimilarity::new().score_tokens(&words, &words);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_disjoint_lists_score_zero() {
        let words1 = word_list(&["alpha", "beta"]);
        let words2 = word_list(&["gamma", "delta"]);
        let score = CosineSimilarity::new().score_tokens(&words1, &words2);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // Vectors (1, 1, 0) and (1, 0, 1): dot = 1, |a| = |b| = sqrt(2).
        let words1 = word_list(&["shared", "one"]);
        let words2 = word_list(&["shared", "two"]);
        let score = CosineSimilarity::new().score_tokens(&words1, &words2);
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_weighting() {
        // Vectors (2, 1) and (1, 1): dot = 3, |a| = sqrt(5), |b| = sqrt(2).
        let words1 = word_list(&["a", "a", "b"]);
        let words2 = word_list(&["a", "b"]);
        let score = CosineSimilarity::new().score_tokens(&words1, &words2);
        let expected = 3.0 / (5.0f64 * 2.0).sqrt();
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry_is_exact() {
        let words1 = word_list(&["a", "a", "b", "c", "c", "c"]);
        let words2 = word_list(&["b", "b", "c", "d"]);
        let measure = CosineSimilarity::new();

        let forward = measure.score_tokens(&words1, &words2);
        let backward = measure.score_tokens(&words2, &words1);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_input_is_nan() {
        let words = word_list(&["something"]);
        let measure = CosineSimilarity::new();

        assert!(measure.score_tokens(&[], &words).is_nan());
        assert!(measure.score_tokens(&words, &[]).is_nan());
        assert!(measure.score_tokens(&[], &[]).is_nan());
    }

    #[test]
    fn test_score_within_bounds() {
        let words1 = word_list(&["a", "b", "c", "a"]);
        let words2 = word_list(&["b", "c", "d"]);
        let score = CosineSimilarity::new().score_tokens(&words1, &words2);
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // Enough distinct tokens to cross PARALLEL_CUTOFF.
        let texts1: Vec<String> = (0..2000).map(|i| format!("w{i}")).collect();
        let texts2: Vec<String> = (1000..3000).map(|i| format!("w{i}")).collect();
        let words1: Vec<Token> = texts1
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.clone(), position))
            .collect();
        let words2: Vec<Token> = texts2
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.clone(), position))
            .collect();

        let measure = CosineSimilarity::new();
        assert_eq!(measure.score_tokens(&words1, &words1), 1.0);

        // 1000 shared dimensions out of 2000 per side.
        let score = measure.score_tokens(&words1, &words2);
        assert!((score - 0.5).abs() < 1e-9);
    }
}
