//! Tag reference entity and the food-truck/tag join entity.

use super::ids::assign_once;
use super::validation::require_text;
use super::{FoodTruckId, FoodTruckTagId, TagId, ValidationError};

/// Free-text label shared across food trucks (e.g. "Tacos", "Vegan").
///
/// ## Invariants
/// - `text` is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    id: Option<TagId>,
    text: String,
}

impl Tag {
    /// Create an unsaved tag.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        require_text(&text, ValidationError::EmptyTagText)?;
        Ok(Self { id: None, text })
    }

    pub(crate) fn from_persisted(id: TagId, text: String) -> Self {
        Self { id: Some(id), text }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<TagId> {
        self.id
    }

    /// Tag label.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub(crate) fn assign_id(&mut self, id: TagId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }
}

/// Association row linking one [`crate::domain::FoodTruck`] to one [`Tag`].
///
/// Modelled as an entity with its own key rather than a bare join table so
/// the link can grow attributes without a schema redesign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodTruckTag {
    id: Option<FoodTruckTagId>,
    food_truck_id: Option<FoodTruckId>,
    tag_id: TagId,
}

impl FoodTruckTag {
    pub(crate) fn new(food_truck_id: Option<FoodTruckId>, tag_id: TagId) -> Self {
        Self {
            id: None,
            food_truck_id,
            tag_id,
        }
    }

    pub(crate) fn from_persisted(
        id: FoodTruckTagId,
        food_truck_id: FoodTruckId,
        tag_id: TagId,
    ) -> Self {
        Self {
            id: Some(id),
            food_truck_id: Some(food_truck_id),
            tag_id,
        }
    }

    /// Store-assigned key, if saved.
    pub fn id(&self) -> Option<FoodTruckTagId> {
        self.id
    }

    /// Owning food truck, once the owner has been saved.
    pub fn food_truck_id(&self) -> Option<FoodTruckId> {
        self.food_truck_id
    }

    /// Referenced tag.
    pub fn tag_id(&self) -> TagId {
        self.tag_id
    }

    pub(crate) fn assign_id(&mut self, id: FoodTruckTagId) -> Result<(), ValidationError> {
        assign_once(&mut self.id, id)
    }

    pub(crate) fn attach_to(&mut self, food_truck_id: FoodTruckId) {
        self.food_truck_id = Some(food_truck_id);
    }
}
