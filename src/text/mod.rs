//! Text processing for tag strings.
//!
//! This module turns tag strings into comparable numeric form:
//! - [`tokenize`]: whitespace tokenization behind the [`Tokenizer`] seam
//! - [`stopwords`]: the replaceable stop-word set
//! - [`vectorize`]: vocabulary fitting and term-count vectors
//! - [`similarity`]: cosine scoring, the pairwise matrix, top-K ranking
//!
//! # Quick Start
//!
//! ```
//! use amistad::text::vectorize::TagVectorizer;
//! use amistad::text::similarity::cosine_similarity;
//!
//! let tags = ["Male Delhi 25 chess", "Male Delhi 26 chess"];
//! let vectorizer = TagVectorizer::new();
//! let vocabulary = vectorizer.fit(&tags).expect("corpus is non-empty");
//!
//! let a = vectorizer.transform(tags[0], &vocabulary).expect("fitted vocabulary");
//! let b = vectorizer.transform(tags[1], &vocabulary).expect("fitted vocabulary");
//! let sim = cosine_similarity(&a, &b).expect("same vocabulary, same length");
//! assert!(sim > 0.5);
//! ```

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// The vectorizer is generic over this seam; the default implementation is
/// [`tokenize::WhitespaceTokenizer`], which matches how tag strings are
/// assembled (single-space joins, no internal whitespace per component).
pub trait Tokenizer {
    /// Tokenize input text.
    ///
    /// # Errors
    ///
    /// Returns an error if the implementation cannot tokenize the input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
