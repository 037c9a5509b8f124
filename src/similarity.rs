//! Text similarity scoring.
//!
//! This module provides the scoring pipeline of the crate:
//!
//! ```text
//! Raw Text A ─┐                ┌─ Token List A ─┐
//!             ├─ Tokenizer ────┤                ├─ SimilarityMeasure ─ f64
//! Raw Text B ─┘                └─ Token List B ─┘
//! ```
//!
//! [`TextSimilarity`] is the entry point: it owns an injected
//! [`Tokenizer`](crate::analysis::tokenizer::Tokenizer) and a
//! [`SimilarityMeasure`], tokenizes both inputs, and returns the measure's
//! score unchanged. The two measures are:
//!
//! - [`CosineSimilarity`] - cosine of the angle between term-frequency
//!   vectors
//! - [`OverlapSimilarity`] - shared-token character length relative to the
//!   shorter input
//!
//! # Degenerate inputs
//!
//! Scoring never fails. When an input tokenizes to nothing, the measures
//! divide by zero and return a non-finite value (NaN). The value is handed
//! back as-is, never clamped or converted into an error; callers that need a
//! defined score for empty inputs must check before scoring.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use textsim::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use textsim::similarity::TextSimilarity;
//!
//! let scorer = TextSimilarity::cosine(Arc::new(WhitespaceTokenizer::new()));
//! let score = scorer
//!     .similar_score("the quick brown fox", "the lazy brown dog")
//!     .unwrap();
//! assert!((score - 0.5).abs() < 1e-9);
//! ```

pub mod cosine;
pub mod frequency;
pub mod overlap;

// Re-export the measures for convenient access
pub use cosine::CosineSimilarity;
pub use overlap::OverlapSimilarity;

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TextSimError};

/// Trait for similarity measures over already-tokenized input.
///
/// A measure is a pure function from two token lists to a score. It never
/// tokenizes; [`TextSimilarity`] does that and hands every measure its input
/// in the same form. Implementations must not mutate or retain the tokens.
///
/// The crate ships exactly two implementations, [`CosineSimilarity`] and
/// [`OverlapSimilarity`]. The trait requires `Send + Sync` so a configured
/// scorer can be shared across threads.
pub trait SimilarityMeasure: Send + Sync {
    /// Score two token lists.
    ///
    /// Token order is irrelevant; only membership and occurrence counts
    /// matter. May return a non-finite value for degenerate inputs.
    fn score_tokens(&self, words1: &[Token], words2: &[Token]) -> f64;

    /// Get the name of this measure (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Computes a similarity score between two pieces of raw text.
///
/// Combines an injected tokenizer with a similarity measure. Each call to
/// [`similar_score`](Self::similar_score) is independent: all intermediate
/// state (token lists, frequency maps) is built fresh and discarded, so one
/// instance can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use textsim::analysis::tokenizer::character::CharacterTokenizer;
/// use textsim::similarity::TextSimilarity;
///
/// let scorer = TextSimilarity::overlap(Arc::new(CharacterTokenizer::new()));
/// let score = scorer.similar_score("我爱购物", "我爱读书").unwrap();
/// assert!((score - 0.5).abs() < 1e-9);
/// ```
pub struct TextSimilarity {
    tokenizer: Arc<dyn Tokenizer>,
    measure: Box<dyn SimilarityMeasure>,
}

impl TextSimilarity {
    /// Create a new scorer with the given tokenizer and measure.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, measure: Box<dyn SimilarityMeasure>) -> Self {
        TextSimilarity { tokenizer, measure }
    }

    /// Create a scorer using [`CosineSimilarity`].
    pub fn cosine(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(tokenizer, Box::new(CosineSimilarity::new()))
    }

    /// Create a scorer using [`OverlapSimilarity`].
    pub fn overlap(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(tokenizer, Box::new(OverlapSimilarity::new()))
    }

    /// Create a scorer selecting the measure by name.
    ///
    /// Accepts `"cosine"` and `"overlap"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not match a known measure.
    pub fn with_measure_name(tokenizer: Arc<dyn Tokenizer>, name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "cosine" => Ok(Self::cosine(tokenizer)),
            "overlap" => Ok(Self::overlap(tokenizer)),
            _ => Err(TextSimError::invalid_operation(format!(
                "Unknown similarity measure: {name}"
            ))),
        }
    }

    /// Get the measure used by this scorer.
    pub fn measure(&self) -> &dyn SimilarityMeasure {
        self.measure.as_ref()
    }

    /// Get the tokenizer used by this scorer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Compute the similarity score between two texts.
    ///
    /// Both inputs are tokenized independently and the token lists handed to
    /// the configured measure. The measure's result is returned unmodified,
    /// including non-finite values for degenerate inputs. An empty string is
    /// a valid input and tokenizes to an empty list.
    ///
    /// # Errors
    ///
    /// A tokenizer failure propagates unchanged; this method adds no error
    /// conditions of its own.
    pub fn similar_score(&self, text1: &str, text2: &str) -> Result<f64> {
        let words1: Vec<Token> = self.tokenizer.tokenize(text1)?.collect();
        let words2: Vec<Token> = self.tokenizer.tokenize(text2)?.collect();

        Ok(self.measure.score_tokens(&words1, &words2))
    }
}

impl fmt::Debug for TextSimilarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSimilarity")
            .field("tokenizer", &self.tokenizer.name())
            .field("measure", &self.measure.name())
            .finish()
    }
}
