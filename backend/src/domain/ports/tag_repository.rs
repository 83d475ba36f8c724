//! Port for shared tag reference data.

use async_trait::async_trait;

use crate::domain::{Tag, TagId};

use super::RepositoryError;

/// Port for loading and storing tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Load one tag.
    async fn load_by_id(&self, id: TagId) -> Result<Tag, RepositoryError>;

    /// Load every tag, ordered by id.
    async fn load_all(&self) -> Result<Vec<Tag>, RepositoryError>;

    /// Insert or update a tag and return it with its id.
    ///
    /// Tag text is unique across the directory; a clash fails with
    /// `RepositoryError::Duplicate`.
    async fn save(&self, tag: &Tag) -> Result<Tag, RepositoryError>;

    /// Delete a tag no food truck is linked to.
    async fn delete(&self, id: TagId) -> Result<(), RepositoryError>;
}
