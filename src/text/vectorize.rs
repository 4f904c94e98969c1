//! Vocabulary fitting and tag-string vectorization.
//!
//! The vectorizer is fit once over the corpus tag strings, producing an
//! immutable [`Vocabulary`] that maps each retained term to a column
//! index. Any tag string — corpus or transient query — then transforms
//! into a [`FeatureVector`] of term counts over that fixed vocabulary;
//! terms the corpus never produced are silently ignored.
//!
//! # Examples
//!
//! ```
//! use amistad::text::vectorize::TagVectorizer;
//!
//! let tags = ["Male Delhi 25 chess", "Female Mumbai 40 cooking"];
//! let vectorizer = TagVectorizer::new();
//! let vocabulary = vectorizer.fit(&tags).expect("corpus is non-empty");
//!
//! // An unseen interest contributes zero weight instead of failing.
//! let vector = vectorizer
//!     .transform("Male Delhi 25 skydiving", &vocabulary)
//!     .expect("fitted vocabulary");
//! assert_eq!(vector.len(), vocabulary.len());
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{AmistadError, Result};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;

/// Default cap on vocabulary size.
pub const DEFAULT_MAX_TERMS: usize = 5000;

/// Fixed mapping from retained terms to vector column indices.
///
/// Fit once from the corpus tag strings; immutable for the lifetime of a
/// session. Column order is the ranking order: document frequency
/// descending, ties by first appearance in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    fn from_ranked_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();
        Self { index, terms }
    }

    /// Number of retained terms, which is also the feature-vector length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of a term, if retained.
    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Whether a term was retained.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Retained terms in column order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// Term-count vector of one tag string over a fitted vocabulary.
///
/// Entry `i` counts occurrences of the vocabulary's term `i`. Length
/// always equals the vocabulary size; out-of-vocabulary terms are not
/// represented.
///
/// # Examples
///
/// ```
/// use amistad::text::vectorize::FeatureVector;
///
/// let v = FeatureVector::from_counts(vec![2, 0, 1]);
/// assert_eq!(v.len(), 3);
/// assert!(!v.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    counts: Vec<u32>,
}

impl FeatureVector {
    /// Create a feature vector from raw term counts.
    #[must_use]
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// Vector length (the vocabulary size it was produced against).
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the vector has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Whether every entry is zero (no vocabulary term occurred).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Raw counts, ordered by vocabulary column index.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }
}

/// Converts tag strings into term-count vectors over a fitted vocabulary.
///
/// Tokens are lowercased, stop words dropped, and the remaining terms
/// counted. Fitting ranks terms by corpus document frequency (ties by
/// first appearance) and keeps at most `max_terms` of them.
///
/// # Examples
///
/// ```
/// use amistad::text::stopwords::StopWordsFilter;
/// use amistad::text::vectorize::TagVectorizer;
///
/// let vectorizer = TagVectorizer::new()
///     .with_max_terms(100)
///     .with_stop_words(StopWordsFilter::english());
///
/// let vocabulary = vectorizer.fit(&["Male Delhi 25 chess"]).expect("non-empty corpus");
/// assert_eq!(vocabulary.len(), 4);
/// ```
pub struct TagVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWordsFilter,
    max_terms: usize,
}

impl std::fmt::Debug for TagVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagVectorizer")
            .field("tokenizer", &"<dyn Tokenizer>")
            .field("stop_words", &self.stop_words)
            .field("max_terms", &self.max_terms)
            .finish()
    }
}

impl TagVectorizer {
    /// Create a vectorizer with whitespace tokenization, English stop
    /// words, and the default vocabulary cap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            stop_words: StopWordsFilter::english(),
            max_terms: DEFAULT_MAX_TERMS,
        }
    }

    /// Set the vocabulary cap (clamped to at least 1).
    #[must_use]
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms.max(1);
        self
    }

    /// Replace the stop-word set.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Replace the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Lowercase, tokenize, and drop stop words — shared by fit and
    /// transform so both sides of the pipeline always agree.
    fn prepare_tokens(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(tokens
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !self.stop_words.is_stop_word(t))
            .collect())
    }

    /// Fit a vocabulary from the corpus tag strings.
    ///
    /// Terms are ranked by the number of tag strings they appear in,
    /// descending; equally frequent terms rank by first appearance in
    /// corpus order, so refitting the same corpus always reproduces the
    /// same vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an empty-corpus error when `tags` is empty or when stop-word
    /// removal leaves no terms at all.
    pub fn fit<S: AsRef<str>>(&self, tags: &[S]) -> Result<Vocabulary> {
        if tags.is_empty() {
            return Err(AmistadError::empty_corpus(
                "cannot fit a vocabulary on an empty corpus",
            ));
        }

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for tag in tags {
            let tokens = self.prepare_tokens(tag.as_ref())?;
            let mut seen_in_doc: HashSet<String> = HashSet::new();
            for token in tokens {
                if !first_seen.contains_key(&token) {
                    let arrival = first_seen.len();
                    first_seen.insert(token.clone(), arrival);
                }
                if seen_in_doc.insert(token.clone()) {
                    *doc_freq.entry(token).or_insert(0) += 1;
                }
            }
        }

        if doc_freq.is_empty() {
            return Err(AmistadError::empty_corpus(
                "every corpus token was removed as a stop word",
            ));
        }

        let mut ranked: Vec<(String, usize)> = doc_freq.into_iter().collect();
        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| first_seen[&a.0].cmp(&first_seen[&b.0]))
        });
        ranked.truncate(self.max_terms);

        Ok(Vocabulary::from_ranked_terms(
            ranked.into_iter().map(|(term, _)| term).collect(),
        ))
    }

    /// Transform one tag string into a term-count vector.
    ///
    /// Terms absent from the vocabulary contribute nothing — an unseen
    /// interest or city must not abort a query, it simply has zero weight.
    ///
    /// # Errors
    ///
    /// Returns an error only if the tokenizer fails.
    pub fn transform(&self, tag: &str, vocabulary: &Vocabulary) -> Result<FeatureVector> {
        let mut counts = vec![0u32; vocabulary.len()];
        for token in self.prepare_tokens(tag)? {
            if let Some(col) = vocabulary.index_of(&token) {
                counts[col] += 1;
            }
        }
        Ok(FeatureVector::from_counts(counts))
    }
}

impl Default for TagVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
