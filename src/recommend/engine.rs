//! The recommendation session and query engine.

use serde::{Deserialize, Serialize};

use crate::error::{AmistadError, Result};
use crate::profile::{Corpus, QueryProfile};
use crate::tag::TagBuilder;
use crate::text::similarity::{self, SimilarityMatrix};
use crate::text::vectorize::{FeatureVector, TagVectorizer, Vocabulary};

/// Default number of recommendations per query.
pub const DEFAULT_K: usize = 5;

/// One ranked candidate connection.
///
/// Results are ordered by descending score; equal scores keep corpus row
/// order, so the same query always yields the same list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Profile id of the candidate
    pub id: u64,
    /// Display name of the candidate
    pub name: String,
    /// Cosine similarity to the querying profile, in `[0, 1]`
    pub score: f64,
}

/// Who the recommendations are for.
///
/// The two variants make the self-exclusion rule explicit: an existing
/// member has a row in the corpus that must not recommend itself, while a
/// new profile has no row and nothing to exclude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// A member already in the corpus, matched by exact name.
    Existing {
        /// Name to look up (first match wins on duplicates)
        name: String,
    },
    /// A not-yet-registered profile described by raw form input.
    New(QueryProfile),
}

/// Friend recommender over a fixed corpus: the one-time session context.
///
/// `build` runs the whole preparation pipeline — tag strings, vocabulary
/// fit, corpus vectors, pairwise similarity matrix — and either completes
/// it or fails; no partially-initialized session is ever returned. The
/// built value is immutable, so sharing it across concurrent readers
/// needs no locking.
///
/// # Examples
///
/// ```
/// use amistad::profile::{Corpus, Gender, Profile, QueryProfile};
/// use amistad::recommend::{FriendRecommender, Query};
/// use amistad::text::vectorize::TagVectorizer;
///
/// let corpus = Corpus::new(vec![
///     Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["chess"]),
///     Profile::new(2, "Bina", Gender::Female, "Delhi", 26, ["chess"]),
/// ]);
/// let recommender = FriendRecommender::build(corpus, TagVectorizer::new()).unwrap();
///
/// let query = Query::New(QueryProfile::new("Noor", "Female", "Delhi", "25", "chess"));
/// let results = recommender.recommend(&query, 5).unwrap();
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Debug)]
pub struct FriendRecommender {
    corpus: Corpus,
    vectorizer: TagVectorizer,
    tag_builder: TagBuilder,
    vocabulary: Vocabulary,
    vectors: Vec<FeatureVector>,
    matrix: Option<SimilarityMatrix>,
}

impl FriendRecommender {
    /// Build the session context with the full similarity matrix.
    ///
    /// # Errors
    ///
    /// Returns an empty-corpus error for an empty corpus or one whose
    /// vocabulary fits to nothing, and a validation error if any corpus
    /// profile has no usable interests. Any failure aborts the build.
    pub fn build(corpus: Corpus, vectorizer: TagVectorizer) -> Result<Self> {
        Self::build_inner(corpus, vectorizer, true)
    }

    /// Build the session context without precomputing the matrix.
    ///
    /// Existing-member queries then score their row on demand — O(n·d)
    /// per query instead of O(n²·d) once. Results are identical.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`build`](Self::build).
    pub fn build_on_demand(corpus: Corpus, vectorizer: TagVectorizer) -> Result<Self> {
        Self::build_inner(corpus, vectorizer, false)
    }

    fn build_inner(corpus: Corpus, vectorizer: TagVectorizer, precompute: bool) -> Result<Self> {
        if corpus.is_empty() {
            return Err(AmistadError::empty_corpus("corpus has no profiles"));
        }

        let tag_builder = TagBuilder::new();
        let tags = corpus
            .iter()
            .map(|profile| tag_builder.build_tag(profile))
            .collect::<Result<Vec<_>>>()?;

        let vocabulary = vectorizer.fit(&tags)?;
        let vectors = tags
            .iter()
            .map(|tag| vectorizer.transform(tag, &vocabulary))
            .collect::<Result<Vec<_>>>()?;

        let matrix = if precompute {
            Some(SimilarityMatrix::compute(&vectors)?)
        } else {
            None
        };

        Ok(Self {
            corpus,
            vectorizer,
            tag_builder,
            vocabulary,
            vectors,
            matrix,
        })
    }

    /// Recommend up to `k` candidates for the given query.
    ///
    /// # Errors
    ///
    /// Validation error when `k` is zero or the query profile is
    /// malformed; not-found error when the name is unknown or no eligible
    /// candidate remains.
    pub fn recommend(&self, query: &Query, k: usize) -> Result<Vec<Recommendation>> {
        match query {
            Query::Existing { name } => self.recommend_for_existing(name, k),
            Query::New(profile) => self.recommend_for_new(profile, k),
        }
    }

    /// Recommend for a member already in the corpus, matched by exact
    /// name. The member's own row is excluded from the results.
    ///
    /// # Errors
    ///
    /// Validation error when `k` is zero; not-found error when no profile
    /// carries the name or when exclusion leaves no candidates.
    pub fn recommend_for_existing(&self, name: &str, k: usize) -> Result<Vec<Recommendation>> {
        check_k(k)?;
        let row = self.corpus.find_by_name(name).ok_or_else(|| {
            AmistadError::not_found(format!("no profile named '{name}' in the corpus"))
        })?;

        let scores = match &self.matrix {
            Some(matrix) => matrix.row(row).to_vec(),
            None => similarity::score_against(&self.vectors[row], &self.vectors)?,
        };
        self.collect_top(&scores, k, Some(row))
    }

    /// Recommend for a brand-new profile that has no corpus row.
    ///
    /// The raw form input is tagged and vectorized against the session
    /// vocabulary; interests the corpus never saw simply weigh zero. No
    /// self-exclusion applies.
    ///
    /// # Errors
    ///
    /// Validation error when `k` is zero, the age does not parse, or no
    /// interest survives normalization; not-found error when the corpus
    /// yields no candidates.
    pub fn recommend_for_new(&self, profile: &QueryProfile, k: usize) -> Result<Vec<Recommendation>> {
        check_k(k)?;
        let tag = self.tag_builder.build_query_tag(profile)?;
        let vector = self.vectorizer.transform(&tag, &self.vocabulary)?;
        let scores = similarity::score_against(&vector, &self.vectors)?;
        self.collect_top(&scores, k, None)
    }

    fn collect_top(
        &self,
        scores: &[f64],
        k: usize,
        exclude: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        let ranked = similarity::top_k(scores, k, exclude);
        if ranked.is_empty() {
            return Err(AmistadError::not_found("no recommendations found"));
        }
        Ok(ranked
            .into_iter()
            .filter_map(|(row, score)| {
                self.corpus.get(row).map(|profile| Recommendation {
                    id: profile.id,
                    name: profile.name.clone(),
                    score,
                })
            })
            .collect())
    }

    /// The corpus this session scores against.
    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The vocabulary fitted at build time.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The corpus feature vectors, in row order.
    #[must_use]
    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    /// The precomputed similarity matrix, if this session carries one.
    #[must_use]
    pub fn similarity_matrix(&self) -> Option<&SimilarityMatrix> {
        self.matrix.as_ref()
    }
}

fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(AmistadError::validation("k must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
