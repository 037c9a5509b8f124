//! Character tokenizer implementation.
//!
//! This module provides a tokenizer that emits one token per character,
//! skipping whitespace. Comparing CJK text character by character is the
//! most common use: scripts without word delimiters can be scored without a
//! segmentation engine.
//!
//! # Examples
//!
//! ```
//! use textsim::analysis::tokenizer::Tokenizer;
//! use textsim::analysis::tokenizer::character::CharacterTokenizer;
//!
//! let tokenizer = CharacterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("我爱购物").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "我");
//! assert_eq!(tokens[3].text, "物");
//! ```

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that emits each non-whitespace character as its own token.
#[derive(Clone, Debug, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    /// Create a new character tokenizer.
    pub fn new() -> Self {
        CharacterTokenizer
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;

        for (start, ch) in text.char_indices() {
            if ch.is_whitespace() {
                continue;
            }
            let end = start + ch.len_utf8();
            tokens.push(Token::with_offsets(&text[start..end], position, start, end));
            position += 1;
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "character"
    }
}
