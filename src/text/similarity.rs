//! Similarity scoring over feature vectors.
//!
//! Cosine similarity between term-count vectors, the precomputed corpus
//! similarity matrix, the single-row scoring path for transient queries,
//! and deterministic top-K ranking.
//!
//! # Quick Start
//!
//! ```
//! use amistad::text::similarity::cosine_similarity;
//! use amistad::text::vectorize::FeatureVector;
//!
//! let a = FeatureVector::from_counts(vec![1, 1, 0]);
//! let b = FeatureVector::from_counts(vec![1, 1, 1]);
//! let sim = cosine_similarity(&a, &b).expect("same length");
//! assert!(sim > 0.0 && sim < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AmistadError, Result};
use crate::text::vectorize::FeatureVector;

/// Cosine similarity between two term-count vectors.
///
/// Counts are non-negative, so the score lands in `[0, 1]`: 1.0 for an
/// identical term-frequency profile, 0.0 for no shared terms. When either
/// vector is all-zero the score is 0.0 by convention — never a division
/// by zero, never NaN.
///
/// # Errors
///
/// Returns a dimension mismatch when the vectors were produced against
/// different vocabularies (different lengths).
///
/// # Examples
///
/// ```
/// use amistad::text::similarity::cosine_similarity;
/// use amistad::text::vectorize::FeatureVector;
///
/// let v = FeatureVector::from_counts(vec![2, 1]);
/// let zero = FeatureVector::from_counts(vec![0, 0]);
/// assert_eq!(cosine_similarity(&v, &v).unwrap(), 1.0);
/// assert_eq!(cosine_similarity(&v, &zero).unwrap(), 0.0);
/// ```
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(AmistadError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0u64;
    let mut norm_a = 0u64;
    let mut norm_b = 0u64;
    for (&x, &y) in a.counts().iter().zip(b.counts()) {
        let (x, y) = (u64::from(x), u64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0 || norm_b == 0 {
        return Ok(0.0);
    }

    // Integer accumulation keeps the score bit-identical across runs; the
    // clamp guards the upper bound against sqrt rounding.
    let score = dot as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    Ok(score.clamp(0.0, 1.0))
}

/// Precomputed pairwise cosine similarities for a corpus.
///
/// Symmetric n×n matrix in row-major storage. The diagonal is 1.0, except
/// for zero-vector rows where self-similarity is 0.0 by the zero-norm
/// convention. Row `i` is the full score row for corpus member `i`.
///
/// Building the matrix is O(n²·d); sessions serving only transient
/// queries can skip it and use [`score_against`] instead.
///
/// # Examples
///
/// ```
/// use amistad::text::similarity::SimilarityMatrix;
/// use amistad::text::vectorize::FeatureVector;
///
/// let vectors = vec![
///     FeatureVector::from_counts(vec![1, 1]),
///     FeatureVector::from_counts(vec![1, 0]),
/// ];
/// let matrix = SimilarityMatrix::compute(&vectors).expect("uniform lengths");
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    data: Vec<f64>,
    n: usize,
}

impl SimilarityMatrix {
    /// Compute all pairwise scores for the corpus vectors.
    ///
    /// Only the upper triangle is scored; symmetry fills the rest.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if the vectors differ in length.
    pub fn compute(vectors: &[FeatureVector]) -> Result<Self> {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = if vectors[i].is_zero() { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let sim = cosine_similarity(&vectors[i], &vectors[j])?;
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }
        Ok(Self { data, n })
    }

    /// Number of corpus rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix was computed over an empty corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score between rows `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    /// Full score row for corpus member `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.n, "row index out of bounds");
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

/// Score a query vector against every corpus vector.
///
/// The O(n·d) path for one-off queries, where recomputing the full matrix
/// would be wasted work.
///
/// # Errors
///
/// Returns a dimension mismatch if the query and a corpus vector differ
/// in length.
pub fn score_against(query: &FeatureVector, corpus: &[FeatureVector]) -> Result<Vec<f64>> {
    corpus
        .iter()
        .map(|vector| cosine_similarity(query, vector))
        .collect()
}

/// Rank scores and keep the top `k`.
///
/// Descending score; equal scores order by ascending corpus row index, so
/// the ranking is deterministic. `exclude` removes one row (the querying
/// member itself) before ranking.
///
/// # Examples
///
/// ```
/// use amistad::text::similarity::top_k;
///
/// let ranked = top_k(&[0.2, 0.9, 0.2, 1.0], 3, Some(3));
/// assert_eq!(ranked, vec![(1, 0.9), (0, 0.2), (2, 0.2)]);
/// ```
#[must_use]
pub fn top_k(scores: &[f64], k: usize, exclude: Option<usize>) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(row, _)| Some(*row) != exclude)
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
