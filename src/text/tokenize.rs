//! Tokenization of tag strings.

use crate::error::Result;
use crate::text::Tokenizer;

/// Tokenizer that splits on Unicode whitespace.
///
/// Tag strings are built by joining normalized components with single
/// spaces, so whitespace splitting recovers exactly the components; runs
/// of whitespace and surrounding whitespace produce no empty tokens.
///
/// # Examples
///
/// ```
/// use amistad::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("Female Delhi 25 chess").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["Female", "Delhi", "25", "chess"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
