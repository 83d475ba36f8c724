//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The static
//! mapping registry in `mapping.rs` describes the same tables for startup
//! validation; keep the three in step.

diesel::table! {
    /// Aggregate root rows.
    food_trucks (food_truck_id) {
        food_truck_id -> Int4,
        truck_name -> Text,
        description -> Nullable<Text>,
        website -> Nullable<Text>,
        /// Optimistic concurrency counter, bumped on every update.
        row_version -> Int4,
    }
}

diesel::table! {
    /// Shared tag labels; `tag_name` is unique.
    tags (tag_id) {
        tag_id -> Int4,
        tag_name -> Text,
    }
}

diesel::table! {
    /// Join entity between food trucks and tags, with its own key.
    food_truck_tags (food_truck_tag_id) {
        food_truck_tag_id -> Int4,
        food_truck_id -> Int4,
        tag_id -> Int4,
    }
}

diesel::table! {
    locations (location_id) {
        location_id -> Int4,
        location_name -> Text,
        street_address -> Text,
        city -> Text,
        state -> Text,
        zip_code -> Text,
    }
}

diesel::table! {
    schedules (schedule_id) {
        schedule_id -> Int4,
        food_truck_id -> Int4,
        location_id -> Int4,
        start_time -> Timestamptz,
        end_time -> Timestamptz,
    }
}

diesel::table! {
    reviews (review_id) {
        review_id -> Int4,
        food_truck_id -> Int4,
        review_date -> Date,
        rating -> Int4,
        details -> Text,
    }
}

diesel::table! {
    social_media_platforms (platform_id) {
        platform_id -> Int4,
        platform_name -> Text,
        /// Profile URL pattern containing the `{0}` placeholder.
        url_template -> Text,
    }
}

diesel::table! {
    social_media_accounts (social_media_account_id) {
        social_media_account_id -> Int4,
        food_truck_id -> Int4,
        platform_id -> Int4,
        account_name -> Text,
    }
}

diesel::joinable!(food_truck_tags -> food_trucks (food_truck_id));
diesel::joinable!(food_truck_tags -> tags (tag_id));
diesel::joinable!(schedules -> food_trucks (food_truck_id));
diesel::joinable!(schedules -> locations (location_id));
diesel::joinable!(reviews -> food_trucks (food_truck_id));
diesel::joinable!(social_media_accounts -> food_trucks (food_truck_id));
diesel::joinable!(social_media_accounts -> social_media_platforms (platform_id));

diesel::allow_tables_to_appear_in_same_query!(
    food_trucks,
    tags,
    food_truck_tags,
    locations,
    schedules,
    reviews,
    social_media_platforms,
    social_media_accounts,
);
