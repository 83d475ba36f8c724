//! Driving port for reference data reads.

use async_trait::async_trait;

use crate::domain::{
    Error, Location, LocationId, SocialMediaPlatform, SocialMediaPlatformId, Tag, TagId,
};

/// Read access to tags, locations and social media platforms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceDataQuery: Send + Sync {
    async fn get_tag(&self, id: TagId) -> Result<Tag, Error>;

    async fn list_tags(&self) -> Result<Vec<Tag>, Error>;

    async fn get_location(&self, id: LocationId) -> Result<Location, Error>;

    async fn list_locations(&self) -> Result<Vec<Location>, Error>;

    async fn get_social_media_platform(
        &self,
        id: SocialMediaPlatformId,
    ) -> Result<SocialMediaPlatform, Error>;

    async fn list_social_media_platforms(&self) -> Result<Vec<SocialMediaPlatform>, Error>;
}
