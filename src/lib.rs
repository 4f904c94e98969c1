//! Amistad: content-based friend recommendation.
//!
//! Amistad scores how alike two people are from a textual summary of who
//! they are — gender, city, age, interests — and recommends the closest
//! candidates. Each profile becomes a normalized tag string, tag strings
//! become term-count vectors over a vocabulary fitted once per corpus,
//! and candidates rank by cosine similarity.
//!
//! # Quick Start
//!
//! ```
//! use amistad::prelude::*;
//!
//! let corpus = Corpus::new(vec![
//!     Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["chess", "painting"]),
//!     Profile::new(2, "Bina", Gender::Female, "Delhi", 26, ["chess"]),
//!     Profile::new(3, "Chirag", Gender::Male, "Mumbai", 40, ["cooking"]),
//! ]);
//!
//! // Build once per session: fits the vocabulary, vectorizes the corpus,
//! // and precomputes pairwise similarities.
//! let recommender = FriendRecommender::build(corpus, TagVectorizer::new()).unwrap();
//!
//! // Query an existing member by name; they never recommend themselves.
//! let friends = recommender.recommend_for_existing("Asha", 2).unwrap();
//! assert_eq!(friends[0].name, "Bina");
//!
//! // Or score a brand-new profile straight from form input.
//! let query = QueryProfile::new("Noor", "Female", "Delhi", "27", "chess, hiking");
//! let friends = recommender.recommend(&Query::New(query), 2).unwrap();
//! assert_eq!(friends.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`profile`]: typed profile records and the corpus
//! - [`tag`]: normalized tag-string construction
//! - [`text`]: tokenization, stop words, vectorization, similarity
//! - [`recommend`]: the session context and query engine
//! - [`error`]: structured error types
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs: identical corpora (in
//! the same order) fit identical vocabularies, identical tag strings
//! produce identical vectors, and equal scores break ties by corpus row
//! index. Repeated runs are bit-identical.

pub mod error;
pub mod prelude;
pub mod profile;
pub mod recommend;
pub mod tag;
pub mod text;

pub use error::{AmistadError, Result};
