//! External request and response shapes.
//!
//! Request models carry the field names clients send (camelCase JSON) and
//! are only loosely typed; `translation.rs` turns them into commands.
//! Fields documented as route-bound are overwritten from the URL path by
//! the handler before translation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    FoodTruck, FoodTruckTag, Location, Review, Schedule, SocialMediaAccount, SocialMediaPlatform,
    Tag,
};

/// `POST /food-trucks`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodTruckModel {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// `PUT /food-trucks/{foodTruckId}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodTruckModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// `POST /food-trucks/{foodTruckId}/tags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFoodTruckTagModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    pub tag_id: i32,
}

/// `POST /food-trucks/{foodTruckId}/schedules`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodTruckScheduleModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// `PUT /food-trucks/{foodTruckId}/schedules/{scheduleId}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleFoodTruckScheduleModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    /// Route-bound.
    #[serde(default)]
    pub schedule_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// `POST /food-trucks/{foodTruckId}/reviews`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodTruckReviewModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    pub review_date: NaiveDate,
    pub rating: i32,
    #[serde(default)]
    pub comments: String,
}

/// `POST /food-trucks/{foodTruckId}/social-media-accounts`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSocialMediaAccountModel {
    /// Route-bound.
    #[serde(default)]
    pub food_truck_id: i32,
    pub platform_id: i32,
    pub account_name: String,
}

/// `POST /tags`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagModel {
    pub text: String,
}

/// `POST /locations`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationModel {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// `PUT /locations/{locationId}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationModel {
    /// Route-bound.
    #[serde(default)]
    pub location_id: i32,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// `POST /social-media-platforms`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSocialMediaPlatformModel {
    pub name: String,
    pub url_template: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTruckResponse {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub version: i32,
    pub average_rating: Option<f64>,
    pub tags: Vec<FoodTruckTagResponse>,
    pub schedules: Vec<ScheduleResponse>,
    pub reviews: Vec<ReviewResponse>,
    pub social_media_accounts: Vec<SocialMediaAccountResponse>,
}

impl From<&FoodTruck> for FoodTruckResponse {
    fn from(truck: &FoodTruck) -> Self {
        Self {
            id: truck.id().map(i32::from),
            name: truck.name().to_owned(),
            description: truck.description().map(str::to_owned),
            website: truck.website().map(str::to_owned),
            version: truck.version(),
            average_rating: truck.average_rating(),
            tags: truck.tags().iter().map(Into::into).collect(),
            schedules: truck.schedules().iter().map(Into::into).collect(),
            reviews: truck.reviews().iter().map(Into::into).collect(),
            social_media_accounts: truck
                .social_media_accounts()
                .iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTruckTagResponse {
    pub id: Option<i32>,
    pub tag_id: i32,
}

impl From<&FoodTruckTag> for FoodTruckTagResponse {
    fn from(link: &FoodTruckTag) -> Self {
        Self {
            id: link.id().map(i32::from),
            tag_id: link.tag_id().value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Option<i32>,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id().map(i32::from),
            location_id: schedule.location_id().value(),
            start_time: schedule.scheduled_start(),
            end_time: schedule.scheduled_end(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Option<i32>,
    pub review_date: NaiveDate,
    pub rating: i32,
    pub comments: String,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id().map(i32::from),
            review_date: review.review_date(),
            rating: review.rating().value(),
            comments: review.details().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaAccountResponse {
    pub id: Option<i32>,
    pub platform_id: i32,
    pub account_name: String,
}

impl From<&SocialMediaAccount> for SocialMediaAccountResponse {
    fn from(account: &SocialMediaAccount) -> Self {
        Self {
            id: account.id().map(i32::from),
            platform_id: account.platform_id().value(),
            account_name: account.account_name().to_owned(),
        }
    }
}

/// Profile URL of a truck's account, rendered from the platform template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaUrlResponse {
    pub platform_id: i32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: Option<i32>,
    pub text: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id().map(i32::from),
            text: tag.text().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: Option<i32>,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id().map(i32::from),
            name: location.name().to_owned(),
            street_address: location.street_address().to_owned(),
            city: location.city().to_owned(),
            state: location.state().to_owned(),
            zip_code: location.zip_code().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPlatformResponse {
    pub id: Option<i32>,
    pub name: String,
    pub url_template: String,
}

impl From<&SocialMediaPlatform> for SocialMediaPlatformResponse {
    fn from(platform: &SocialMediaPlatform) -> Self {
        Self {
            id: platform.id().map(i32::from),
            name: platform.name().to_owned(),
            url_template: platform.url_template().as_str().to_owned(),
        }
    }
}
