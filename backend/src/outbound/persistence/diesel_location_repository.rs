//! PostgreSQL-backed `LocationRepository`.
//!
//! Deleting a location still referenced by a schedule trips the
//! `RESTRICT` foreign key and surfaces as `RepositoryError::ReferenceInUse`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LocationRepository, RepositoryError};
use crate::domain::{Location, LocationId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{LocationRow, LocationWrite};
use super::pool::DbPool;
use super::schema::locations;

const ENTITY: &str = "location";

/// Diesel-backed location repository.
#[derive(Clone)]
pub struct DieselLocationRepository {
    pool: DbPool,
}

impl DieselLocationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for DieselLocationRepository {
    async fn load_by_id(&self, id: LocationId) -> Result<Location, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        locations::table
            .find(id.value())
            .select(LocationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Location::from)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn load_all(&self) -> Result<Vec<Location>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = locations::table
            .order(locations::location_id)
            .select(LocationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn save(&self, location: &Location) -> Result<Location, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let write = LocationWrite::from(location);
        let row = match location.id() {
            None => diesel::insert_into(locations::table)
                .values(&write)
                .returning(LocationRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => diesel::update(locations::table.find(id.value()))
                .set(&write)
                .returning(LocationRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?
                .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?,
        };
        Ok(Location::from(row))
    }

    async fn delete(&self, id: LocationId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(locations::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }
        Ok(())
    }
}
