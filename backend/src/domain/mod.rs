//! Domain primitives, aggregates and services.
//!
//! Purpose: define the food truck directory model with its invariants kept
//! behind accessors, plus the services that apply commands to it through
//! repository ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - ValidationError: invariant violations raised by entity methods.
//! - FoodTruck: aggregate root owning tag links, schedules, reviews and
//!   social media accounts.
//! - Tag, Location, SocialMediaPlatform: shared reference entities.
//! - EntityMapping and friends: relational mapping declarations checked at
//!   startup against the live schema.

pub mod commands;
pub mod error;
mod food_truck;
pub mod food_truck_service;
mod ids;
mod location;
pub mod mapping;
pub mod ports;
pub mod reference_data_service;
mod review;
mod schedule;
mod schema;
mod social_media;
mod tag;
mod validation;
mod values;

pub use self::error::{Error, ErrorCode};
pub(crate) use self::food_truck::PersistedFoodTruck;
pub use self::food_truck::{FoodTruck, INITIAL_VERSION};
pub use self::food_truck_service::{FoodTruckCommandService, FoodTruckQueryService};
pub use self::ids::{
    FoodTruckId, FoodTruckTagId, LocationId, ReviewId, ScheduleId, SocialMediaAccountId,
    SocialMediaPlatformId, TagId,
};
pub use self::location::{Location, LocationDraft};
pub use self::mapping::{
    AssociationKind, AssociationMapping, ColumnMapping, EntityMapping, MappingConfigurationError,
    MappingMismatch, MappingValidationService, SqlType, find_mapping_mismatches,
    validate_mappings,
};
pub use self::reference_data_service::ReferenceDataService;
pub use self::review::Review;
pub use self::schedule::Schedule;
pub use self::schema::{SchemaColumn, SchemaDiagram, SchemaRelationship, SchemaTable};
pub use self::social_media::{SocialMediaAccount, SocialMediaPlatform};
pub use self::tag::{FoodTruckTag, Tag};
pub use self::validation::{AddressField, ChildKind, ValidationError};
pub use self::values::{ACCOUNT_PLACEHOLDER, Rating, UrlTemplate};
