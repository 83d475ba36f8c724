//! Internal commands consumed by the domain command services.
//!
//! Commands are plain immutable records. They carry typed identifiers but no
//! validated values: validation happens when a service applies the command
//! to an entity.

use chrono::{DateTime, NaiveDate, Utc};

use super::{
    FoodTruckId, LocationId, ReviewId, ScheduleId, SocialMediaAccountId, SocialMediaPlatformId,
    TagId,
};

/// Register a new food truck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFoodTruckCommand {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Replace a food truck's name and details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFoodTruckCommand {
    pub food_truck_id: FoodTruckId,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Remove a food truck and everything it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFoodTruckCommand {
    pub food_truck_id: FoodTruckId,
}

/// Link an existing tag to a food truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddFoodTruckTagCommand {
    pub food_truck_id: FoodTruckId,
    pub tag_id: TagId,
}

/// Unlink a tag from a food truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveFoodTruckTagCommand {
    pub food_truck_id: FoodTruckId,
    pub tag_id: TagId,
}

/// Plan a food truck stop at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateFoodTruckScheduleCommand {
    pub food_truck_id: FoodTruckId,
    pub location_id: LocationId,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
}

/// Cancel a planned stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveFoodTruckScheduleCommand {
    pub food_truck_id: FoodTruckId,
    pub schedule_id: ScheduleId,
}

/// Move a planned stop to a new time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescheduleFoodTruckScheduleCommand {
    pub food_truck_id: FoodTruckId,
    pub schedule_id: ScheduleId,
    pub scheduled_start: DateTime<Utc>,
    pub scheduled_end: DateTime<Utc>,
}

/// Record a customer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFoodTruckReviewCommand {
    pub food_truck_id: FoodTruckId,
    pub review_date: NaiveDate,
    pub rating: i32,
    pub details: String,
}

/// Attach a social media handle to a food truck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSocialMediaAccountCommand {
    pub food_truck_id: FoodTruckId,
    pub platform_id: SocialMediaPlatformId,
    pub account_name: String,
}

/// Delete a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveFoodTruckReviewCommand {
    pub food_truck_id: FoodTruckId,
    pub review_id: ReviewId,
}

/// Detach a social media handle from a food truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSocialMediaAccountCommand {
    pub food_truck_id: FoodTruckId,
    pub social_media_account_id: SocialMediaAccountId,
}

/// Create a shared tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTagCommand {
    pub text: String,
}

/// Create a shared location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLocationCommand {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Replace every address component of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateLocationCommand {
    pub location_id: LocationId,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Create a social media platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSocialMediaPlatformCommand {
    pub name: String,
    pub url_template: String,
}
