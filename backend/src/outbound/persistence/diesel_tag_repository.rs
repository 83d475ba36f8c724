//! PostgreSQL-backed `TagRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, TagRepository};
use crate::domain::{Tag, TagId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{TagRow, TagWrite};
use super::pool::DbPool;
use super::schema::tags;

const ENTITY: &str = "tag";

/// Diesel-backed tag repository.
#[derive(Clone)]
pub struct DieselTagRepository {
    pool: DbPool,
}

impl DieselTagRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for DieselTagRepository {
    async fn load_by_id(&self, id: TagId) -> Result<Tag, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        tags::table
            .find(id.value())
            .select(TagRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Tag::from)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn load_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = tags::table
            .order(tags::tag_id)
            .select(TagRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn save(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let write = TagWrite::from(tag);
        let row = match tag.id() {
            None => diesel::insert_into(tags::table)
                .values(&write)
                .returning(TagRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => diesel::update(tags::table.find(id.value()))
                .set(&write)
                .returning(TagRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?
                .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?,
        };
        Ok(Tag::from(row))
    }

    async fn delete(&self, id: TagId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(tags::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }
        Ok(())
    }
}
