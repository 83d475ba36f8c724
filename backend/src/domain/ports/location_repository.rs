//! Port for location reference data.

use async_trait::async_trait;

use crate::domain::{Location, LocationId};

use super::RepositoryError;

/// Port for loading and storing locations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Load one location.
    async fn load_by_id(&self, id: LocationId) -> Result<Location, RepositoryError>;

    /// Load every location, ordered by id.
    async fn load_all(&self) -> Result<Vec<Location>, RepositoryError>;

    /// Insert or update a location and return it with its id.
    async fn save(&self, location: &Location) -> Result<Location, RepositoryError>;

    /// Delete a location. Fails with `RepositoryError::ReferenceInUse` while
    /// any schedule still points at it.
    async fn delete(&self, id: LocationId) -> Result<(), RepositoryError>;
}
