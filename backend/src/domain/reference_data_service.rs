//! Reference data services for tags, locations and social media platforms.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::commands::{
    CreateLocationCommand, CreateSocialMediaPlatformCommand, CreateTagCommand,
    UpdateLocationCommand,
};
use crate::domain::food_truck_service::map_repository_error;
use crate::domain::ports::{
    LocationRepository, ReferenceDataCommand, ReferenceDataQuery, SocialMediaPlatformRepository,
    TagRepository,
};
use crate::domain::{
    Error, Location, LocationDraft, LocationId, SocialMediaPlatform, SocialMediaPlatformId, Tag,
    TagId,
};

/// Reference data service implementing both the command and query ports.
#[derive(Clone)]
pub struct ReferenceDataService<T, L, P> {
    tags: Arc<T>,
    locations: Arc<L>,
    platforms: Arc<P>,
}

impl<T, L, P> ReferenceDataService<T, L, P> {
    /// Create a service over the reference data repositories.
    pub fn new(tags: Arc<T>, locations: Arc<L>, platforms: Arc<P>) -> Self {
        Self {
            tags,
            locations,
            platforms,
        }
    }
}

#[async_trait]
impl<T, L, P> ReferenceDataCommand for ReferenceDataService<T, L, P>
where
    T: TagRepository,
    L: LocationRepository,
    P: SocialMediaPlatformRepository,
{
    async fn create_tag(&self, command: CreateTagCommand) -> Result<Tag, Error> {
        let tag = Tag::new(command.text)?;
        let saved = self.tags.save(&tag).await.map_err(map_repository_error)?;
        info!(tag_id = ?saved.id(), text = saved.text(), "tag created");
        Ok(saved)
    }

    async fn delete_tag(&self, id: TagId) -> Result<(), Error> {
        self.tags.delete(id).await.map_err(map_repository_error)
    }

    async fn create_location(&self, command: CreateLocationCommand) -> Result<Location, Error> {
        let CreateLocationCommand {
            name,
            street_address,
            city,
            state,
            zip_code,
        } = command;
        let location = Location::new(LocationDraft {
            name,
            street_address,
            city,
            state,
            zip_code,
        })?;
        self.locations
            .save(&location)
            .await
            .map_err(map_repository_error)
    }

    async fn update_location(&self, command: UpdateLocationCommand) -> Result<Location, Error> {
        let UpdateLocationCommand {
            location_id,
            name,
            street_address,
            city,
            state,
            zip_code,
        } = command;
        let mut location = self
            .locations
            .load_by_id(location_id)
            .await
            .map_err(map_repository_error)?;
        location.update(LocationDraft {
            name,
            street_address,
            city,
            state,
            zip_code,
        })?;
        self.locations
            .save(&location)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_location(&self, id: LocationId) -> Result<(), Error> {
        self.locations.delete(id).await.map_err(map_repository_error)
    }

    async fn create_social_media_platform(
        &self,
        command: CreateSocialMediaPlatformCommand,
    ) -> Result<SocialMediaPlatform, Error> {
        let platform = SocialMediaPlatform::new(command.name, command.url_template)?;
        self.platforms
            .save(&platform)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_social_media_platform(&self, id: SocialMediaPlatformId) -> Result<(), Error> {
        self.platforms.delete(id).await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<T, L, P> ReferenceDataQuery for ReferenceDataService<T, L, P>
where
    T: TagRepository,
    L: LocationRepository,
    P: SocialMediaPlatformRepository,
{
    async fn get_tag(&self, id: TagId) -> Result<Tag, Error> {
        self.tags.load_by_id(id).await.map_err(map_repository_error)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, Error> {
        self.tags.load_all().await.map_err(map_repository_error)
    }

    async fn get_location(&self, id: LocationId) -> Result<Location, Error> {
        self.locations
            .load_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, Error> {
        self.locations.load_all().await.map_err(map_repository_error)
    }

    async fn get_social_media_platform(
        &self,
        id: SocialMediaPlatformId,
    ) -> Result<SocialMediaPlatform, Error> {
        self.platforms
            .load_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_social_media_platforms(&self) -> Result<Vec<SocialMediaPlatform>, Error> {
        self.platforms.load_all().await.map_err(map_repository_error)
    }
}
