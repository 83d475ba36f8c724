//! Port for persisting the FoodTruck aggregate with all of its children.

use async_trait::async_trait;

use crate::domain::{FoodTruck, FoodTruckId};

use super::RepositoryError;

/// Port for loading and storing food trucks.
///
/// `save` writes the whole aggregate: the root row, then every tag link,
/// schedule, review and social media account. Children missing from the
/// aggregate are deleted; children without an id are inserted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodTruckRepository: Send + Sync {
    /// Load one truck with its children.
    async fn load_by_id(&self, id: FoodTruckId) -> Result<FoodTruck, RepositoryError>;

    /// Load every truck with its children, ordered by id.
    async fn load_all(&self) -> Result<Vec<FoodTruck>, RepositoryError>;

    /// Insert or update the aggregate and return it with assigned ids and
    /// the new row version.
    async fn save(&self, food_truck: &FoodTruck) -> Result<FoodTruck, RepositoryError>;

    /// Delete the truck; owned children go with it.
    async fn delete(&self, id: FoodTruckId) -> Result<(), RepositoryError>;
}
