//! Port for social media platform reference data.

use async_trait::async_trait;

use crate::domain::{SocialMediaPlatform, SocialMediaPlatformId};

use super::RepositoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialMediaPlatformRepository: Send + Sync {
    async fn load_by_id(
        &self,
        id: SocialMediaPlatformId,
    ) -> Result<SocialMediaPlatform, RepositoryError>;

    async fn load_all(&self) -> Result<Vec<SocialMediaPlatform>, RepositoryError>;

    async fn save(
        &self,
        platform: &SocialMediaPlatform,
    ) -> Result<SocialMediaPlatform, RepositoryError>;

    /// Fails with `RepositoryError::ReferenceInUse` while any account is
    /// registered on the platform.
    async fn delete(&self, id: SocialMediaPlatformId) -> Result<(), RepositoryError>;
}
