//! Text analysis module for textsim.
//!
//! This module provides the tokenization side of the scoring pipeline: the
//! [`Token`](token::Token) type that flows into the similarity measures and
//! the [`Tokenizer`](tokenizer::Tokenizer) implementations that produce it.

pub mod token;
pub mod tokenizer;
