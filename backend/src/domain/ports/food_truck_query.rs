//! Driving port for food truck reads.

use async_trait::async_trait;

use crate::domain::{Error, FoodTruck, FoodTruckId};

/// Read access to stored food trucks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodTruckQuery: Send + Sync {
    /// Fetch one truck; unknown ids map to [`crate::domain::ErrorCode::NotFound`].
    async fn get_food_truck(&self, id: FoodTruckId) -> Result<FoodTruck, Error>;

    /// Fetch every truck.
    async fn list_food_trucks(&self) -> Result<Vec<FoodTruck>, Error>;
}
