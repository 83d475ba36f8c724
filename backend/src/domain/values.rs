//! Small immutable value objects used as entity attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Placeholder substituted with the account name in a [`UrlTemplate`].
pub const ACCOUNT_PLACEHOLDER: &str = "{0}";

/// Review score on a closed one-to-five scale.
///
/// # Examples
/// ```
/// use backend::domain::Rating;
///
/// assert_eq!(Rating::new(4).map(Rating::value), Ok(4));
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(i32);

impl Rating {
    /// Lowest accepted score.
    pub const MIN: i32 = 1;
    /// Highest accepted score.
    pub const MAX: i32 = 5;

    /// Validate a raw score.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::RatingOutOfRange { rating: value });
        }
        Ok(Self(value))
    }

    /// Wrap a stored score without range checks.
    pub(crate) const fn from_persisted(value: i32) -> Self {
        Self(value)
    }

    /// Raw score.
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<Rating> for i32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Profile URL pattern for a social media platform, e.g.
/// `https://twitter.com/{0}`.
///
/// ## Invariants
/// - Contains [`ACCOUNT_PLACEHOLDER`] at least once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Validate a template string.
    pub fn new(template: impl Into<String>) -> Result<Self, ValidationError> {
        let template = template.into();
        if !template.contains(ACCOUNT_PLACEHOLDER) {
            return Err(ValidationError::MissingUrlPlaceholder);
        }
        Ok(Self(template))
    }

    pub(crate) fn from_persisted(template: String) -> Self {
        Self(template)
    }

    /// Substitute `account_name` for every placeholder occurrence.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UrlTemplate;
    ///
    /// let template = UrlTemplate::new("https://instagram.com/{0}").expect("valid template");
    /// assert_eq!(template.render("tacotime"), "https://instagram.com/tacotime");
    /// ```
    pub fn render(&self, account_name: &str) -> String {
        self.0.replace(ACCOUNT_PLACEHOLDER, account_name)
    }

    /// Template text as stored.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UrlTemplate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UrlTemplate> for String {
    fn from(value: UrlTemplate) -> Self {
        value.0
    }
}

impl TryFrom<String> for UrlTemplate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn rating_accepts_bounds(#[case] value: i32) {
        assert_eq!(Rating::new(value).map(Rating::value), Ok(value));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn rating_rejects_out_of_range(#[case] value: i32) {
        assert_eq!(
            Rating::new(value),
            Err(ValidationError::RatingOutOfRange { rating: value })
        );
    }

    #[rstest]
    fn rating_deserialisation_validates() {
        let result = serde_json::from_str::<Rating>("6");
        assert!(result.is_err());
    }

    #[rstest]
    fn template_requires_placeholder() {
        assert_eq!(
            UrlTemplate::new("https://facebook.com/"),
            Err(ValidationError::MissingUrlPlaceholder)
        );
    }

    #[rstest]
    fn template_replaces_every_placeholder() {
        let template = UrlTemplate::new("https://{0}.example.com/u/{0}").expect("valid template");
        assert_eq!(
            template.render("wagon"),
            "https://wagon.example.com/u/wagon"
        );
    }
}
