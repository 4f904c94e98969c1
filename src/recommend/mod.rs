//! Friend recommendation over a fixed corpus.
//!
//! The session context is built once — tag every profile, fit the
//! vocabulary, vectorize the corpus, precompute pairwise similarities —
//! and then serves any number of read-only queries.
//!
//! # Quick Start
//!
//! ```
//! use amistad::profile::{Corpus, Gender, Profile};
//! use amistad::recommend::FriendRecommender;
//! use amistad::text::vectorize::TagVectorizer;
//!
//! let corpus = Corpus::new(vec![
//!     Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["chess"]),
//!     Profile::new(2, "Bina", Gender::Female, "Delhi", 26, ["chess"]),
//!     Profile::new(3, "Chirag", Gender::Male, "Mumbai", 40, ["cooking"]),
//! ]);
//!
//! let recommender = FriendRecommender::build(corpus, TagVectorizer::new())
//!     .expect("corpus is non-empty");
//! let friends = recommender.recommend_for_existing("Asha", 2).expect("two candidates");
//! assert_eq!(friends[0].name, "Bina");
//! ```

mod engine;

pub use engine::{FriendRecommender, Query, Recommendation, DEFAULT_K};
