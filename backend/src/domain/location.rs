//! Location reference entity.

use super::ids::assign_once;
use super::validation::AddressField;
use super::{LocationId, ValidationError};

/// Input payload for [`Location::new`] and [`Location::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDraft {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A place where food trucks park.
///
/// Locations are shared reference data: schedules point at them, but a
/// location keeps no list of the schedules that use it.
///
/// ## Invariants
/// - Every address component is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: Option<LocationId>,
    name: String,
    street_address: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Location {
    /// Create an unsaved, validated location.
    pub fn new(draft: LocationDraft) -> Result<Self, ValidationError> {
        validate_draft(&draft)?;
        Ok(Self::from_draft(None, draft))
    }

    pub(crate) fn from_persisted(id: LocationId, draft: LocationDraft) -> Self {
        Self::from_draft(Some(id), draft)
    }

    fn from_draft(id: Option<LocationId>, draft: LocationDraft) -> Self {
        let LocationDraft {
            name,
            street_address,
            city,
            state,
            zip_code,
        } = draft;
        Self {
            id,
            name,
            street_address,
            city,
            state,
            zip_code,
        }
    }

    /// Replace every address component, validating all of them first.
    pub fn update(&mut self, draft: LocationDraft) -> Result<(), ValidationError> {
        validate_draft(&draft)?;
        *self = Self::from_draft(self.id, draft);
        Ok(())
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<LocationId> {
        self.id
    }

    /// Display name, e.g. "Courthouse Square".
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Street line of the address.
    pub fn street_address(&self) -> &str {
        self.street_address.as_str()
    }

    /// City.
    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    /// State or region.
    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    /// Postal code.
    pub fn zip_code(&self) -> &str {
        self.zip_code.as_str()
    }

    pub(crate) fn assign_id(&mut self, id: LocationId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }
}

fn validate_draft(draft: &LocationDraft) -> Result<(), ValidationError> {
    let fields = [
        (AddressField::Name, draft.name.as_str()),
        (AddressField::StreetAddress, draft.street_address.as_str()),
        (AddressField::City, draft.city.as_str()),
        (AddressField::State, draft.state.as_str()),
        (AddressField::ZipCode, draft.zip_code.as_str()),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ValidationError::EmptyAddressField { field: *field }),
        None => Ok(()),
    }
}
