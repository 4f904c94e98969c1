//! Tag-string construction.
//!
//! A tag string is the normalized, space-joined textual summary of a
//! profile: gender, city/country, age, then the interests, in that fixed
//! order. It is the unit of vectorization — two profiles are as similar as
//! their tag strings' term counts.
//!
//! # Examples
//!
//! ```
//! use amistad::profile::{Gender, Profile};
//! use amistad::tag::TagBuilder;
//!
//! let profile = Profile::new(1, "Asha", Gender::Female, "Delhi", 25, ["machine learning"]);
//! let tag = TagBuilder::new().build_tag(&profile).expect("profile has interests");
//! assert_eq!(tag, "Female Delhi 25 machinelearning");
//! ```

use crate::error::{AmistadError, Result};
use crate::profile::{Profile, QueryProfile};

/// Builds normalized tag strings from profile fields.
///
/// The field order is fixed — gender, city/country, age, interests — so any
/// re-implementation that joins the same normalized components in the same
/// order reproduces the scoring exactly. Building is a pure function:
/// identical inputs yield byte-identical tag strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagBuilder;

impl TagBuilder {
    /// Create a tag builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the tag string for a registered profile.
    ///
    /// City and interest components are normalized; the gender contributes
    /// its fixed tag token.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no interest survives normalization —
    /// a profile with only demographic tokens carries no discriminating
    /// signal and is rejected before it can skew every sparse query.
    pub fn build_tag(&self, profile: &Profile) -> Result<String> {
        let interests = normalize_interests(profile.interests.iter().map(String::as_str));
        if interests.is_empty() {
            return Err(AmistadError::validation(format!(
                "profile '{}' has no interests after normalization",
                profile.name
            )));
        }
        Ok(join_tag(
            profile.gender.as_tag_token(),
            &normalize_token(&profile.city),
            profile.age,
            &interests,
        ))
    }

    /// Build the tag string for a raw, not-yet-registered query profile.
    ///
    /// Parses the free-form age and the comma-separated interests line,
    /// then joins the same fixed field order as [`build_tag`](Self::build_tag).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the age is not a non-negative
    /// integer or when no interest survives normalization.
    pub fn build_query_tag(&self, query: &QueryProfile) -> Result<String> {
        let age = parse_age(&query.age)?;
        let interests = parse_interests(&query.interests);
        if interests.is_empty() {
            return Err(AmistadError::validation(format!(
                "query profile '{}' has no interests after normalization",
                query.name
            )));
        }
        Ok(join_tag(
            &normalize_token(&query.gender),
            &normalize_token(&query.city_or_country),
            age,
            &interests,
        ))
    }
}

/// Normalize one tag component: trim surrounding whitespace and quote
/// characters, then drop all internal whitespace.
///
/// # Examples
///
/// ```
/// use amistad::tag::normalize_token;
///
/// assert_eq!(normalize_token(" 'machine learning' "), "machinelearning");
/// assert_eq!(normalize_token("\"chess\""), "chess");
/// assert_eq!(normalize_token("   "), "");
/// ```
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Split a comma-separated free-text interests line into normalized
/// interest tokens, dropping entries that normalize to nothing.
///
/// # Examples
///
/// ```
/// use amistad::tag::parse_interests;
///
/// let interests = parse_interests("chess, 'machine learning', , cooking");
/// assert_eq!(interests, vec!["chess", "machinelearning", "cooking"]);
/// ```
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parse an age string as a non-negative integer.
///
/// # Errors
///
/// Returns a validation error for empty input, signs, non-digits, or
/// values that overflow `u32`.
///
/// # Examples
///
/// ```
/// use amistad::tag::parse_age;
///
/// assert_eq!(parse_age(" 42 ").unwrap(), 42);
/// assert!(parse_age("-3").is_err());
/// assert!(parse_age("old enough").is_err());
/// ```
pub fn parse_age(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let invalid = || {
        AmistadError::validation(format!("age '{raw}' is not a non-negative integer"))
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse::<u32>().map_err(|_| invalid())
}

fn normalize_interests<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(normalize_token).filter(|t| !t.is_empty()).collect()
}

fn join_tag(gender: &str, city: &str, age: u32, interests: &[String]) -> String {
    format!("{gender} {city} {age} {}", interests.join(" "))
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
