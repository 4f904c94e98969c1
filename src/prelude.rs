//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use amistad::prelude::*;
//! ```

pub use crate::error::{AmistadError, Result};
pub use crate::profile::{Corpus, Gender, Profile, QueryProfile};
pub use crate::recommend::{FriendRecommender, Query, Recommendation, DEFAULT_K};
pub use crate::tag::TagBuilder;
pub use crate::text::stopwords::StopWordsFilter;
pub use crate::text::vectorize::{FeatureVector, TagVectorizer, Vocabulary, DEFAULT_MAX_TERMS};
