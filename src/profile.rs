//! Profile records and the corpus they form.
//!
//! A [`Profile`] is a registered member with validated, typed fields; a
//! [`QueryProfile`] is the raw form input for a not-yet-registered user.
//! The [`Corpus`] freezes an ordered population of profiles behind stable
//! row indices so that vectors, similarity rows, and results stay
//! correlated for the lifetime of a session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of a profile, as collected by the registration form.
///
/// # Examples
///
/// ```
/// use amistad::profile::Gender;
///
/// assert_eq!(Gender::PreferNotToSay.to_string(), "Prefer not to say");
/// assert_eq!(Gender::PreferNotToSay.as_tag_token(), "Prefernottosay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other gender identities
    Others,
    /// Declined to answer
    PreferNotToSay,
}

impl Gender {
    /// Token this gender contributes to a tag string.
    ///
    /// Tag tokens carry no internal whitespace, so the multi-word display
    /// form collapses to a single token.
    #[must_use]
    pub fn as_tag_token(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
            Gender::PreferNotToSay => "Prefernottosay",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
            Gender::PreferNotToSay => "Prefer not to say",
        };
        write!(f, "{s}")
    }
}

/// A registered member of the network.
///
/// Fields arrive already validated from the data-loading side: the age is
/// an integer (date-of-birth resolution happens upstream) and the corpus
/// is already filtered to the relevant population.
///
/// # Examples
///
/// ```
/// use amistad::profile::{Gender, Profile};
///
/// let p = Profile::new(7, "Asha", Gender::Female, "Delhi", 25, ["chess", "painting"]);
/// assert_eq!(p.interests.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique, stable identifier
    pub id: u64,
    /// Display name, used for exact-match query lookup
    pub name: String,
    /// Gender
    pub gender: Gender,
    /// Home city (or country, for populations filtered another way)
    pub city: String,
    /// Age in years
    pub age: u32,
    /// Interests in their original order; duplicates are allowed
    pub interests: Vec<String>,
}

impl Profile {
    /// Create a profile from validated field values.
    pub fn new<N, C, I, S>(id: u64, name: N, gender: Gender, city: C, age: u32, interests: I) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            gender,
            city: city.into(),
            age,
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw form input for a user who is not in the corpus yet.
///
/// Everything is a string straight from the input widgets: gender may be
/// free-form, age is unparsed, and interests are one comma-separated line.
/// The tag builder owns parsing and normalization of all of it.
///
/// # Examples
///
/// ```
/// use amistad::profile::QueryProfile;
///
/// let q = QueryProfile::new("Noor", "Female", "India", "31", "hiking, street photography");
/// assert_eq!(q.age, "31");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryProfile {
    /// Display name (not used for scoring)
    pub name: String,
    /// Free-form gender text
    pub gender: String,
    /// City or country text
    pub city_or_country: String,
    /// Age as entered, parsed by the tag builder
    pub age: String,
    /// Comma-separated free-text interests
    pub interests: String,
}

impl QueryProfile {
    /// Create a query profile from raw form values.
    pub fn new<N, G, C, A, I>(name: N, gender: G, city_or_country: C, age: A, interests: I) -> Self
    where
        N: Into<String>,
        G: Into<String>,
        C: Into<String>,
        A: Into<String>,
        I: Into<String>,
    {
        Self {
            name: name.into(),
            gender: gender.into(),
            city_or_country: city_or_country.into(),
            age: age.into(),
            interests: interests.into(),
        }
    }
}

/// The fixed population queries are scored against.
///
/// Row order is frozen at construction. Row index `i` identifies the same
/// profile in the corpus, its feature vector, and row `i` of the
/// similarity matrix; reordering would invalidate all three, so no
/// mutation is exposed.
///
/// # Examples
///
/// ```
/// use amistad::profile::{Corpus, Gender, Profile};
///
/// let corpus = Corpus::new(vec![
///     Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["chess"]),
///     Profile::new(2, "Bina", Gender::Female, "Pune", 30, ["cooking"]),
/// ]);
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.find_by_name("Bina"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    profiles: Vec<Profile>,
}

impl Corpus {
    /// Freeze an ordered list of profiles into a corpus.
    #[must_use]
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the corpus holds no profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile at the given row index, if in bounds.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Profile> {
        self.profiles.get(row)
    }

    /// Row index of the first profile whose name matches exactly.
    ///
    /// Duplicate names resolve to the earliest row.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.name == name)
    }

    /// Iterate profiles in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.profiles.iter()
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
