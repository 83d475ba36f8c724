//! Driving port for tag, location and social media platform mutations.

use async_trait::async_trait;

use crate::domain::commands::{
    CreateLocationCommand, CreateSocialMediaPlatformCommand, CreateTagCommand,
    UpdateLocationCommand,
};
use crate::domain::{
    Error, Location, LocationId, SocialMediaPlatform, SocialMediaPlatformId, Tag, TagId,
};

/// Mutations of the reference entities food trucks point at.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceDataCommand: Send + Sync {
    async fn create_tag(&self, command: CreateTagCommand) -> Result<Tag, Error>;

    async fn delete_tag(&self, id: TagId) -> Result<(), Error>;

    async fn create_location(&self, command: CreateLocationCommand) -> Result<Location, Error>;

    async fn update_location(&self, command: UpdateLocationCommand) -> Result<Location, Error>;

    async fn delete_location(&self, id: LocationId) -> Result<(), Error>;

    async fn create_social_media_platform(
        &self,
        command: CreateSocialMediaPlatformCommand,
    ) -> Result<SocialMediaPlatform, Error>;

    async fn delete_social_media_platform(&self, id: SocialMediaPlatformId) -> Result<(), Error>;
}
