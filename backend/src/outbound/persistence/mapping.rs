//! Relational mapping registry for every persisted entity.
//!
//! Declares, in one place, which table and columns back each entity and how
//! the tables reference one another. The registry is checked against the
//! live schema at startup by `MappingValidationService`; it must agree with
//! `schema.rs` and the migrations.

use crate::domain::{
    AssociationKind, AssociationMapping, ColumnMapping, EntityMapping, SqlType,
};

const fn column(
    attribute: &'static str,
    column: &'static str,
    sql_type: SqlType,
    nullable: bool,
) -> ColumnMapping {
    ColumnMapping {
        attribute,
        column,
        sql_type,
        nullable,
    }
}

const fn owned_by_truck(reverse_collection: &'static str) -> AssociationMapping {
    AssociationMapping {
        kind: AssociationKind::OwnedBy,
        foreign_key: "food_truck_id",
        referenced_table: "food_trucks",
        reverse_collection: Some(reverse_collection),
    }
}

const fn references(foreign_key: &'static str, referenced_table: &'static str) -> AssociationMapping {
    AssociationMapping {
        kind: AssociationKind::References,
        foreign_key,
        referenced_table,
        reverse_collection: None,
    }
}

pub const FOOD_TRUCK_MAPPING: EntityMapping = EntityMapping {
    entity: "FoodTruck",
    table: "food_trucks",
    primary_key: "food_truck_id",
    columns: &[
        column("id", "food_truck_id", SqlType::Integer, false),
        column("name", "truck_name", SqlType::Text, false),
        column("description", "description", SqlType::Text, true),
        column("website", "website", SqlType::Text, true),
        column("version", "row_version", SqlType::Integer, false),
    ],
    associations: &[],
};

pub const TAG_MAPPING: EntityMapping = EntityMapping {
    entity: "Tag",
    table: "tags",
    primary_key: "tag_id",
    columns: &[
        column("id", "tag_id", SqlType::Integer, false),
        column("text", "tag_name", SqlType::Text, false),
    ],
    associations: &[],
};

pub const FOOD_TRUCK_TAG_MAPPING: EntityMapping = EntityMapping {
    entity: "FoodTruckTag",
    table: "food_truck_tags",
    primary_key: "food_truck_tag_id",
    columns: &[
        column("id", "food_truck_tag_id", SqlType::Integer, false),
        column("food_truck_id", "food_truck_id", SqlType::Integer, false),
        column("tag_id", "tag_id", SqlType::Integer, false),
    ],
    associations: &[owned_by_truck("tags"), references("tag_id", "tags")],
};

pub const LOCATION_MAPPING: EntityMapping = EntityMapping {
    entity: "Location",
    table: "locations",
    primary_key: "location_id",
    columns: &[
        column("id", "location_id", SqlType::Integer, false),
        column("name", "location_name", SqlType::Text, false),
        column("street_address", "street_address", SqlType::Text, false),
        column("city", "city", SqlType::Text, false),
        column("state", "state", SqlType::Text, false),
        column("zip_code", "zip_code", SqlType::Text, false),
    ],
    associations: &[],
};

pub const SCHEDULE_MAPPING: EntityMapping = EntityMapping {
    entity: "Schedule",
    table: "schedules",
    primary_key: "schedule_id",
    columns: &[
        column("id", "schedule_id", SqlType::Integer, false),
        column("food_truck_id", "food_truck_id", SqlType::Integer, false),
        column("location_id", "location_id", SqlType::Integer, false),
        column("scheduled_start", "start_time", SqlType::Timestamptz, false),
        column("scheduled_end", "end_time", SqlType::Timestamptz, false),
    ],
    associations: &[
        owned_by_truck("schedules"),
        references("location_id", "locations"),
    ],
};

pub const REVIEW_MAPPING: EntityMapping = EntityMapping {
    entity: "Review",
    table: "reviews",
    primary_key: "review_id",
    columns: &[
        column("id", "review_id", SqlType::Integer, false),
        column("food_truck_id", "food_truck_id", SqlType::Integer, false),
        column("review_date", "review_date", SqlType::Date, false),
        column("rating", "rating", SqlType::Integer, false),
        column("details", "details", SqlType::Text, false),
    ],
    associations: &[owned_by_truck("reviews")],
};

pub const SOCIAL_MEDIA_PLATFORM_MAPPING: EntityMapping = EntityMapping {
    entity: "SocialMediaPlatform",
    table: "social_media_platforms",
    primary_key: "platform_id",
    columns: &[
        column("id", "platform_id", SqlType::Integer, false),
        column("name", "platform_name", SqlType::Text, false),
        column("url_template", "url_template", SqlType::Text, false),
    ],
    associations: &[],
};

pub const SOCIAL_MEDIA_ACCOUNT_MAPPING: EntityMapping = EntityMapping {
    entity: "SocialMediaAccount",
    table: "social_media_accounts",
    primary_key: "social_media_account_id",
    columns: &[
        column("id", "social_media_account_id", SqlType::Integer, false),
        column("food_truck_id", "food_truck_id", SqlType::Integer, false),
        column("platform_id", "platform_id", SqlType::Integer, false),
        column("account_name", "account_name", SqlType::Text, false),
    ],
    associations: &[
        owned_by_truck("social_media_accounts"),
        references("platform_id", "social_media_platforms"),
    ],
};

/// Every mapped entity, parents before children.
pub static ENTITY_MAPPINGS: &[EntityMapping] = &[
    FOOD_TRUCK_MAPPING,
    TAG_MAPPING,
    FOOD_TRUCK_TAG_MAPPING,
    LOCATION_MAPPING,
    SCHEDULE_MAPPING,
    REVIEW_MAPPING,
    SOCIAL_MEDIA_PLATFORM_MAPPING,
    SOCIAL_MEDIA_ACCOUNT_MAPPING,
];
