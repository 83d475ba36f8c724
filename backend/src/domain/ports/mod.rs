//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod food_truck_command;
mod food_truck_query;
mod food_truck_repository;
mod location_repository;
mod reference_data_command;
mod reference_data_query;
mod repository_error;
mod schema_snapshot_repository;
mod social_media_platform_repository;
mod tag_repository;

#[cfg(test)]
pub use food_truck_command::MockFoodTruckCommand;
pub use food_truck_command::FoodTruckCommand;
#[cfg(test)]
pub use food_truck_query::MockFoodTruckQuery;
pub use food_truck_query::FoodTruckQuery;
#[cfg(test)]
pub use food_truck_repository::MockFoodTruckRepository;
pub use food_truck_repository::FoodTruckRepository;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
pub use location_repository::LocationRepository;
#[cfg(test)]
pub use reference_data_command::MockReferenceDataCommand;
pub use reference_data_command::ReferenceDataCommand;
#[cfg(test)]
pub use reference_data_query::MockReferenceDataQuery;
pub use reference_data_query::ReferenceDataQuery;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use schema_snapshot_repository::MockSchemaSnapshotRepository;
pub use schema_snapshot_repository::{SchemaSnapshotRepository, SchemaSnapshotRepositoryError};
#[cfg(test)]
pub use social_media_platform_repository::MockSocialMediaPlatformRepository;
pub use social_media_platform_repository::SocialMediaPlatformRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
pub use tag_repository::TagRepository;
