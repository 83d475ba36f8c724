//! PostgreSQL-backed `SocialMediaPlatformRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, SocialMediaPlatformRepository};
use crate::domain::{SocialMediaPlatform, SocialMediaPlatformId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{SocialMediaPlatformRow, SocialMediaPlatformWrite};
use super::pool::DbPool;
use super::schema::social_media_platforms;

const ENTITY: &str = "social media platform";

/// Diesel-backed social media platform repository.
#[derive(Clone)]
pub struct DieselSocialMediaPlatformRepository {
    pool: DbPool,
}

impl DieselSocialMediaPlatformRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialMediaPlatformRepository for DieselSocialMediaPlatformRepository {
    async fn load_by_id(
        &self,
        id: SocialMediaPlatformId,
    ) -> Result<SocialMediaPlatform, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        social_media_platforms::table
            .find(id.value())
            .select(SocialMediaPlatformRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(SocialMediaPlatform::from)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))
    }

    async fn load_all(&self) -> Result<Vec<SocialMediaPlatform>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = social_media_platforms::table
            .order(social_media_platforms::platform_id)
            .select(SocialMediaPlatformRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(SocialMediaPlatform::from).collect())
    }

    async fn save(
        &self,
        platform: &SocialMediaPlatform,
    ) -> Result<SocialMediaPlatform, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let write = SocialMediaPlatformWrite::from(platform);
        let row = match platform.id() {
            None => diesel::insert_into(social_media_platforms::table)
                .values(&write)
                .returning(SocialMediaPlatformRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => diesel::update(social_media_platforms::table.find(id.value()))
                .set(&write)
                .returning(SocialMediaPlatformRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?
                .ok_or_else(|| RepositoryError::not_found(ENTITY, id.value()))?,
        };
        Ok(SocialMediaPlatform::from(row))
    }

    async fn delete(&self, id: SocialMediaPlatformId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(social_media_platforms::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if deleted == 0 {
            return Err(RepositoryError::not_found(ENTITY, id.value()));
        }
        Ok(())
    }
}
