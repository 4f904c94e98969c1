//! Stop-word exclusion for vocabulary fitting.
//!
//! Tag strings occasionally pick up common English words through free-text
//! interests ("love of cooking", "the outdoors"). Stop words carry no
//! discriminating signal between profiles, so the vectorizer drops them
//! before counting. The default English set is replaceable per session.
//!
//! # Examples
//!
//! ```
//! use amistad::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("chess"));
//! ```

use std::collections::HashSet;

/// Replaceable stop-word set with case-insensitive lookup.
///
/// # Examples
///
/// ```
/// use amistad::text::stopwords::StopWordsFilter;
///
/// let custom = StopWordsFilter::new(["delhi", "mumbai"]);
/// assert!(custom.is_stop_word("Delhi"));
/// assert!(!custom.is_stop_word("chess"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordsFilter {
    /// Stored lowercase; lookups lowercase the probe word
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use amistad::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("because"));
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Create an empty filter that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            stop_words: HashSet::new(),
        }
    }

    /// Whether a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    fn default() -> Self {
        Self::english()
    }
}

/// Default English stop words.
///
/// Common articles, pronouns, prepositions, conjunctions, auxiliary verbs,
/// and question words, drawn from the usual NLTK/scikit-learn lists.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "down",
    "during", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "through", "throughout", "to", "toward", "under",
    "underneath", "until", "up", "upon", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than", "that", "though",
    "unless", "while",
    // auxiliary and common verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "can",
    "may", "might", "must", "will", "shall",
    // determiners, adverbs, and the rest of the usual suspects
    "all", "any", "both", "each", "every", "few", "more", "most", "much", "neither",
    "no", "none", "not", "one", "other", "same", "several", "some", "such", "very",
    "too", "only", "own", "then", "there", "these", "this", "those", "just", "now",
    "here", "again", "also", "another",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
