//! # textsim
//!
//! A text similarity scoring library for Rust.
//!
//! textsim reduces two pieces of text to token lists through a pluggable
//! tokenizer and scores the pair with an interchangeable similarity measure.
//! It is a scoring primitive for near-duplicate detection, clustering, or
//! ranking, not a search or NLP pipeline.
//!
//! ## Features
//!
//! - Cosine similarity over term-frequency vectors
//! - Length-weighted shared-token overlap scoring
//! - Injectable tokenizer boundary with character, whitespace, Unicode word,
//!   and regex tokenizers included
//! - Exact integer accumulation, parallelized for large vocabularies
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use textsim::analysis::tokenizer::character::CharacterTokenizer;
//! use textsim::similarity::TextSimilarity;
//!
//! let scorer = TextSimilarity::cosine(Arc::new(CharacterTokenizer::new()));
//!
//! let score = scorer.similar_score("我爱购物", "我爱读书").unwrap();
//! assert!((score - 0.5).abs() < 1e-9);
//! ```

pub mod analysis;
pub mod error;
pub mod similarity;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{
        CharacterTokenizer, RegexTokenizer, Tokenizer, UnicodeWordTokenizer, WhitespaceTokenizer,
    };
    pub use crate::error::{Result, TextSimError};
    pub use crate::similarity::{
        CosineSimilarity, OverlapSimilarity, SimilarityMeasure, TextSimilarity,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
