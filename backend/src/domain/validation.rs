//! Validation failures raised by entity constructors and mutations.
//!
//! Every variant is a distinct, machine-readable kind. Constructors never
//! clamp or coerce input; they return one of these instead.

use std::fmt;

use super::values::Rating;

/// Address component of a [`crate::domain::Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Name,
    StreetAddress,
    City,
    State,
    ZipCode,
}

impl AddressField {
    /// Stable field name used in error details.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StreetAddress => "streetAddress",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Child collections owned by a [`crate::domain::FoodTruck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Tag,
    Schedule,
    Review,
    SocialMediaAccount,
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tag => "tag",
            Self::Schedule => "schedule",
            Self::Review => "review",
            Self::SocialMediaAccount => "social media account",
        };
        f.write_str(name)
    }
}

/// Invariant violations reported by the domain model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    EmptyWebsite,
    EmptyTagText,
    DuplicateTag { tag_id: i32 },
    EmptyAddressField { field: AddressField },
    InvalidTimeRange,
    RatingOutOfRange { rating: i32 },
    ReviewDateInFuture,
    MissingUrlPlaceholder,
    EmptyPlatformName,
    EmptyAccountName,
    DuplicateSocialMediaAccount { platform_id: i32 },
    IdAlreadyAssigned,
    UnknownChild { kind: ChildKind, id: i32 },
    UnsavedReference { entity: &'static str },
}

impl ValidationError {
    /// Stable snake_case identifier for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::EmptyWebsite => "empty_website",
            Self::EmptyTagText => "empty_tag_text",
            Self::DuplicateTag { .. } => "duplicate_tag",
            Self::EmptyAddressField { .. } => "empty_address_field",
            Self::InvalidTimeRange => "invalid_time_range",
            Self::RatingOutOfRange { .. } => "rating_out_of_range",
            Self::ReviewDateInFuture => "review_date_in_future",
            Self::MissingUrlPlaceholder => "missing_url_placeholder",
            Self::EmptyPlatformName => "empty_platform_name",
            Self::EmptyAccountName => "empty_account_name",
            Self::DuplicateSocialMediaAccount { .. } => "duplicate_social_media_account",
            Self::IdAlreadyAssigned => "id_already_assigned",
            Self::UnknownChild { .. } => "unknown_child",
            Self::UnsavedReference { .. } => "unsaved_reference",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyWebsite => write!(f, "website must not be blank when present"),
            Self::EmptyTagText => write!(f, "tag text must not be empty"),
            Self::DuplicateTag { tag_id } => {
                write!(f, "tag {tag_id} is already attached to this food truck")
            }
            Self::EmptyAddressField { field } => {
                write!(f, "location {field} must not be empty")
            }
            Self::InvalidTimeRange => {
                write!(f, "scheduled start must be before scheduled end")
            }
            Self::RatingOutOfRange { rating } => write!(
                f,
                "rating must be between {} and {} (got {rating})",
                Rating::MIN,
                Rating::MAX
            ),
            Self::ReviewDateInFuture => write!(f, "review date must not be in the future"),
            Self::MissingUrlPlaceholder => write!(
                f,
                "url template must contain the {} placeholder",
                super::values::ACCOUNT_PLACEHOLDER
            ),
            Self::EmptyPlatformName => write!(f, "platform name must not be empty"),
            Self::EmptyAccountName => write!(f, "account name must not be empty"),
            Self::DuplicateSocialMediaAccount { platform_id } => write!(
                f,
                "food truck already has an account on platform {platform_id}"
            ),
            Self::IdAlreadyAssigned => write!(f, "entity id has already been assigned"),
            Self::UnknownChild { kind, id } => {
                write!(f, "{kind} {id} does not belong to this food truck")
            }
            Self::UnsavedReference { entity } => {
                write!(f, "{entity} must be saved before it can be referenced")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject blank text, returning `error` when `value` is empty once trimmed.
pub(crate) fn require_text(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ValidationError::InvalidTimeRange, "invalid_time_range")]
    #[case(ValidationError::RatingOutOfRange { rating: 6 }, "rating_out_of_range")]
    #[case(ValidationError::EmptyName, "empty_name")]
    #[case(
        ValidationError::EmptyAddressField { field: AddressField::City },
        "empty_address_field"
    )]
    fn codes_are_stable(#[case] error: ValidationError, #[case] code: &str) {
        assert_eq!(error.code(), code);
    }

    #[rstest]
    fn rating_message_names_bounds() {
        let message = ValidationError::RatingOutOfRange { rating: 9 }.to_string();
        assert!(message.contains("between 1 and 5"));
        assert!(message.contains("got 9"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn require_text_rejects_blank(#[case] value: &str) {
        assert_eq!(
            require_text(value, ValidationError::EmptyName),
            Err(ValidationError::EmptyName)
        );
    }
}
