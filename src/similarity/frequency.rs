//! Term frequency counting shared by the similarity measures.

use std::fmt::Write;

use ahash::AHashMap;

use crate::analysis::token::Token;

/// A mapping from distinct token to its occurrence count in one token list.
///
/// Keys borrow from the scored slice; the map lives for one scoring call.
pub type FrequencyMap<'a> = AHashMap<&'a Token, u64>;

/// Count the occurrences of each distinct token in a token list.
pub fn frequency(words: &[Token]) -> FrequencyMap<'_> {
    let mut frequency = AHashMap::with_capacity(words.len());
    for word in words {
        *frequency.entry(word).or_insert(0) += 1;
    }
    frequency
}

/// Format a frequency map for diagnostic logging, count-descending.
///
/// Ties are broken by token text so the rendering is deterministic.
pub fn format_frequency(frequency: &FrequencyMap<'_>) -> String {
    let mut entries: Vec<(&&Token, &u64)> = frequency.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.text.cmp(&b.0.text)));

    let mut out = String::new();
    for (rank, (word, count)) in entries.iter().enumerate() {
        let _ = writeln!(out, "\t{}. {word}={count}", rank + 1);
    }
    out.pop();
    out
}
