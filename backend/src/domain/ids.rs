//! Surrogate identifiers assigned by the persistence layer.
//!
//! Keys are opaque integers generated by the store on insert. The domain
//! never invents them; it only carries them once assigned.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a store-generated key.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw key value as stored in the database.
            pub const fn value(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_entity_id!(
    /// Key of a row in `food_trucks`.
    FoodTruckId
);
define_entity_id!(
    /// Key of a row in `tags`.
    TagId
);
define_entity_id!(
    /// Key of a row in `food_truck_tags`.
    FoodTruckTagId
);
define_entity_id!(
    /// Key of a row in `locations`.
    LocationId
);
define_entity_id!(
    /// Key of a row in `schedules`.
    ScheduleId
);
define_entity_id!(
    /// Key of a row in `reviews`.
    ReviewId
);
define_entity_id!(
    /// Key of a row in `social_media_platforms`.
    SocialMediaPlatformId
);
define_entity_id!(
    /// Key of a row in `social_media_accounts`.
    SocialMediaAccountId
);

/// Assign `id` to an unset slot exactly once.
pub(crate) fn assign_once<T: Copy>(slot: &mut Option<T>, id: T) -> Result<(), ValidationError> {
    if slot.is_some() {
        return Err(ValidationError::IdAlreadyAssigned);
    }
    *slot = Some(id);
    Ok(())
}
