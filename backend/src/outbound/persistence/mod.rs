//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL
//! through `diesel-async` and a shared `bb8` pool, plus the pieces the
//! startup sequence needs: embedded migrations, catalog introspection and
//! the relational mapping registry.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; repositories hand out domain entities only.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselFoodTruckRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/trucks")).await?;
//! let food_trucks = DieselFoodTruckRepository::new(pool.clone());
//! ```

mod diesel_error_mapping;
mod diesel_food_truck_repository;
mod diesel_location_repository;
mod diesel_social_media_platform_repository;
mod diesel_tag_repository;
pub mod mapping;
mod migrations;
mod models;
mod pool;
mod postgres_schema_snapshot_repository;
mod schema;

pub use diesel_food_truck_repository::DieselFoodTruckRepository;
pub use diesel_location_repository::DieselLocationRepository;
pub use diesel_social_media_platform_repository::DieselSocialMediaPlatformRepository;
pub use diesel_tag_repository::DieselTagRepository;
pub use mapping::ENTITY_MAPPINGS;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
pub use postgres_schema_snapshot_repository::PostgresSchemaSnapshotRepository;
