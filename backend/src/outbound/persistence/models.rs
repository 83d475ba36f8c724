//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Reads go through `*Row` structs and are
//! turned into entities with the crate-private `from_persisted`
//! constructors; writes go through borrowed `New*Row` and `*Update` structs.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::{
    FoodTruck, FoodTruckId, FoodTruckTag, FoodTruckTagId, Location, LocationDraft, LocationId,
    PersistedFoodTruck, Review, ReviewId, Schedule, ScheduleId, SocialMediaAccount,
    SocialMediaAccountId, SocialMediaPlatform, SocialMediaPlatformId, Tag, TagId,
};

use super::schema::{
    food_truck_tags, food_trucks, locations, reviews, schedules, social_media_accounts,
    social_media_platforms, tags,
};

// ---------------------------------------------------------------------------
// Food trucks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = food_trucks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FoodTruckRow {
    pub food_truck_id: i32,
    pub truck_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub row_version: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = food_trucks)]
pub(crate) struct NewFoodTruckRow<'a> {
    pub truck_name: &'a str,
    pub description: Option<&'a str>,
    pub website: Option<&'a str>,
    pub row_version: i32,
}

/// Changeset for an update; `None` clears the nullable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = food_trucks)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct FoodTruckUpdate<'a> {
    pub truck_name: &'a str,
    pub description: Option<&'a str>,
    pub website: Option<&'a str>,
    pub row_version: i32,
}

impl<'a> NewFoodTruckRow<'a> {
    pub(crate) fn from_domain(food_truck: &'a FoodTruck) -> Self {
        Self {
            truck_name: food_truck.name(),
            description: food_truck.description(),
            website: food_truck.website(),
            row_version: food_truck.version(),
        }
    }
}

impl<'a> FoodTruckUpdate<'a> {
    pub(crate) fn from_domain(food_truck: &'a FoodTruck, row_version: i32) -> Self {
        Self {
            truck_name: food_truck.name(),
            description: food_truck.description(),
            website: food_truck.website(),
            row_version,
        }
    }
}

/// All rows making up one aggregate.
#[derive(Debug, Clone)]
pub(crate) struct FoodTruckGraph {
    pub root: FoodTruckRow,
    pub tags: Vec<FoodTruckTagRow>,
    pub schedules: Vec<ScheduleRow>,
    pub reviews: Vec<ReviewRow>,
    pub social_media_accounts: Vec<SocialMediaAccountRow>,
}

impl From<FoodTruckGraph> for FoodTruck {
    fn from(graph: FoodTruckGraph) -> Self {
        let FoodTruckGraph {
            root,
            tags,
            schedules,
            reviews,
            social_media_accounts,
        } = graph;
        FoodTruck::from_persisted(PersistedFoodTruck {
            id: FoodTruckId::new(root.food_truck_id),
            name: root.truck_name,
            description: root.description,
            website: root.website,
            version: root.row_version,
            tags: tags.into_iter().map(Into::into).collect(),
            schedules: schedules.into_iter().map(Into::into).collect(),
            reviews: reviews.into_iter().map(Into::into).collect(),
            social_media_accounts: social_media_accounts.into_iter().map(Into::into).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Owned children
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = food_truck_tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FoodTruckTagRow {
    pub food_truck_tag_id: i32,
    pub food_truck_id: i32,
    pub tag_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = food_truck_tags)]
pub(crate) struct NewFoodTruckTagRow {
    pub food_truck_id: i32,
    pub tag_id: i32,
}

impl NewFoodTruckTagRow {
    pub(crate) fn from_domain(food_truck_id: FoodTruckId, link: &FoodTruckTag) -> Self {
        Self {
            food_truck_id: food_truck_id.value(),
            tag_id: link.tag_id().value(),
        }
    }
}

impl From<FoodTruckTagRow> for FoodTruckTag {
    fn from(row: FoodTruckTagRow) -> Self {
        FoodTruckTag::from_persisted(
            FoodTruckTagId::new(row.food_truck_tag_id),
            FoodTruckId::new(row.food_truck_id),
            TagId::new(row.tag_id),
        )
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ScheduleRow {
    pub schedule_id: i32,
    pub food_truck_id: i32,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schedules)]
pub(crate) struct NewScheduleRow {
    pub food_truck_id: i32,
    pub location_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Window change for a stored schedule.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schedules)]
pub(crate) struct ScheduleWindowUpdate {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<ScheduleRow> for Schedule {
    fn from(row: ScheduleRow) -> Self {
        Schedule::from_persisted(
            ScheduleId::new(row.schedule_id),
            FoodTruckId::new(row.food_truck_id),
            LocationId::new(row.location_id),
            row.start_time,
            row.end_time,
        )
    }
}

impl NewScheduleRow {
    pub(crate) fn from_domain(food_truck_id: FoodTruckId, schedule: &Schedule) -> Self {
        Self {
            food_truck_id: food_truck_id.value(),
            location_id: schedule.location_id().value(),
            start_time: schedule.scheduled_start(),
            end_time: schedule.scheduled_end(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub review_id: i32,
    pub food_truck_id: i32,
    pub review_date: NaiveDate,
    pub rating: i32,
    pub details: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub food_truck_id: i32,
    pub review_date: NaiveDate,
    pub rating: i32,
    pub details: &'a str,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review::from_persisted(
            ReviewId::new(row.review_id),
            FoodTruckId::new(row.food_truck_id),
            row.review_date,
            row.rating,
            row.details,
        )
    }
}

impl<'a> NewReviewRow<'a> {
    pub(crate) fn from_domain(food_truck_id: FoodTruckId, review: &'a Review) -> Self {
        Self {
            food_truck_id: food_truck_id.value(),
            review_date: review.review_date(),
            rating: review.rating().value(),
            details: review.details(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = social_media_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SocialMediaAccountRow {
    pub social_media_account_id: i32,
    pub food_truck_id: i32,
    pub platform_id: i32,
    pub account_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = social_media_accounts)]
pub(crate) struct NewSocialMediaAccountRow<'a> {
    pub food_truck_id: i32,
    pub platform_id: i32,
    pub account_name: &'a str,
}

impl From<SocialMediaAccountRow> for SocialMediaAccount {
    fn from(row: SocialMediaAccountRow) -> Self {
        SocialMediaAccount::from_persisted(
            SocialMediaAccountId::new(row.social_media_account_id),
            FoodTruckId::new(row.food_truck_id),
            SocialMediaPlatformId::new(row.platform_id),
            row.account_name,
        )
    }
}

impl<'a> NewSocialMediaAccountRow<'a> {
    pub(crate) fn from_domain(food_truck_id: FoodTruckId, account: &'a SocialMediaAccount) -> Self {
        Self {
            food_truck_id: food_truck_id.value(),
            platform_id: account.platform_id().value(),
            account_name: account.account_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TagRow {
    pub tag_id: i32,
    pub tag_name: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tags)]
pub(crate) struct TagWrite<'a> {
    pub tag_name: &'a str,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag::from_persisted(TagId::new(row.tag_id), row.tag_name)
    }
}

impl<'a> From<&'a Tag> for TagWrite<'a> {
    fn from(tag: &'a Tag) -> Self {
        Self {
            tag_name: tag.text(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LocationRow {
    pub location_id: i32,
    pub location_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = locations)]
pub(crate) struct LocationWrite<'a> {
    pub location_name: &'a str,
    pub street_address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::from_persisted(
            LocationId::new(row.location_id),
            LocationDraft {
                name: row.location_name,
                street_address: row.street_address,
                city: row.city,
                state: row.state,
                zip_code: row.zip_code,
            },
        )
    }
}

impl<'a> From<&'a Location> for LocationWrite<'a> {
    fn from(location: &'a Location) -> Self {
        Self {
            location_name: location.name(),
            street_address: location.street_address(),
            city: location.city(),
            state: location.state(),
            zip_code: location.zip_code(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = social_media_platforms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SocialMediaPlatformRow {
    pub platform_id: i32,
    pub platform_name: String,
    pub url_template: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = social_media_platforms)]
pub(crate) struct SocialMediaPlatformWrite<'a> {
    pub platform_name: &'a str,
    pub url_template: &'a str,
}

impl From<SocialMediaPlatformRow> for SocialMediaPlatform {
    fn from(row: SocialMediaPlatformRow) -> Self {
        SocialMediaPlatform::from_persisted(
            SocialMediaPlatformId::new(row.platform_id),
            row.platform_name,
            row.url_template,
        )
    }
}

impl<'a> From<&'a SocialMediaPlatform> for SocialMediaPlatformWrite<'a> {
    fn from(platform: &'a SocialMediaPlatform) -> Self {
        Self {
            platform_name: platform.name(),
            url_template: platform.url_template().as_str(),
        }
    }
}
