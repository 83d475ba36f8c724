//! Food truck domain services.
//!
//! These services implement the food truck driving ports: they load the
//! aggregate through the repository port, apply one entity method, and
//! save the result.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::commands::{
    AddFoodTruckTagCommand, AddSocialMediaAccountCommand, CreateFoodTruckCommand,
    CreateFoodTruckReviewCommand, CreateFoodTruckScheduleCommand, DeleteFoodTruckCommand,
    RemoveFoodTruckReviewCommand, RemoveFoodTruckScheduleCommand, RemoveFoodTruckTagCommand,
    RemoveSocialMediaAccountCommand, RescheduleFoodTruckScheduleCommand, UpdateFoodTruckCommand,
};
use crate::domain::ports::{
    FoodTruckCommand, FoodTruckQuery, FoodTruckRepository, LocationRepository, RepositoryError,
    SocialMediaPlatformRepository, TagRepository,
};
use crate::domain::{Error, FoodTruck, FoodTruckId, ValidationError};

/// Translate a repository failure into the transport-agnostic domain error.
pub(crate) fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::NotFound { .. } | RepositoryError::MissingReference { .. } => {
            Error::not_found(error.to_string())
        }
        RepositoryError::ConcurrencyConflict { .. }
        | RepositoryError::ReferenceInUse { .. }
        | RepositoryError::Duplicate { .. } => Error::conflict(error.to_string()),
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("repository unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("repository error: {message}"))
        }
    }
}

/// Food truck service implementing the command driving port.
#[derive(Clone)]
pub struct FoodTruckCommandService<F, T, L, P> {
    food_trucks: Arc<F>,
    tags: Arc<T>,
    locations: Arc<L>,
    platforms: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<F, T, L, P> FoodTruckCommandService<F, T, L, P> {
    /// Create a command service over the four repositories.
    pub fn new(
        food_trucks: Arc<F>,
        tags: Arc<T>,
        locations: Arc<L>,
        platforms: Arc<P>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            food_trucks,
            tags,
            locations,
            platforms,
            clock,
        }
    }
}

impl<F, T, L, P> FoodTruckCommandService<F, T, L, P>
where
    F: FoodTruckRepository,
{
    async fn save(&self, food_truck: &FoodTruck) -> Result<FoodTruck, Error> {
        self.food_trucks
            .save(food_truck)
            .await
            .map_err(map_repository_error)
    }

    async fn mutate<M>(&self, id: FoodTruckId, mutation: M) -> Result<FoodTruck, Error>
    where
        M: FnOnce(&mut FoodTruck) -> Result<(), ValidationError> + Send,
    {
        let mut food_truck = self
            .food_trucks
            .load_by_id(id)
            .await
            .map_err(map_repository_error)?;
        mutation(&mut food_truck)?;
        self.save(&food_truck).await
    }
}

#[async_trait]
impl<F, T, L, P> FoodTruckCommand for FoodTruckCommandService<F, T, L, P>
where
    F: FoodTruckRepository,
    T: TagRepository,
    L: LocationRepository,
    P: SocialMediaPlatformRepository,
{
    async fn create_food_truck(
        &self,
        command: CreateFoodTruckCommand,
    ) -> Result<FoodTruck, Error> {
        let CreateFoodTruckCommand {
            name,
            description,
            website,
        } = command;
        let food_truck = FoodTruck::new(name, description, website)?;
        let saved = self.save(&food_truck).await?;
        info!(food_truck_id = ?saved.id(), name = saved.name(), "food truck created");
        Ok(saved)
    }

    async fn update_food_truck(
        &self,
        command: UpdateFoodTruckCommand,
    ) -> Result<FoodTruck, Error> {
        let UpdateFoodTruckCommand {
            food_truck_id,
            name,
            description,
            website,
        } = command;
        self.mutate(food_truck_id, move |food_truck| {
            // Validate both fields before touching either.
            let mut updated = food_truck.clone();
            updated.rename(name)?;
            updated.update_details(description, website)?;
            *food_truck = updated;
            Ok(())
        })
        .await
    }

    async fn delete_food_truck(&self, command: DeleteFoodTruckCommand) -> Result<(), Error> {
        self.food_trucks
            .delete(command.food_truck_id)
            .await
            .map_err(map_repository_error)?;
        info!(food_truck_id = %command.food_truck_id, "food truck deleted");
        Ok(())
    }

    async fn add_tag(&self, command: AddFoodTruckTagCommand) -> Result<FoodTruck, Error> {
        let tag = self
            .tags
            .load_by_id(command.tag_id)
            .await
            .map_err(map_repository_error)?;
        self.mutate(command.food_truck_id, move |food_truck| {
            food_truck.add_tag(&tag)
        })
        .await
    }

    async fn remove_tag(&self, command: RemoveFoodTruckTagCommand) -> Result<FoodTruck, Error> {
        self.mutate(command.food_truck_id, move |food_truck| {
            food_truck.remove_tag(command.tag_id)
        })
        .await
    }

    async fn add_schedule(
        &self,
        command: CreateFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error> {
        let CreateFoodTruckScheduleCommand {
            food_truck_id,
            location_id,
            scheduled_start,
            scheduled_end,
        } = command;
        self.locations
            .load_by_id(location_id)
            .await
            .map_err(map_repository_error)?;
        self.mutate(food_truck_id, move |food_truck| {
            food_truck.add_schedule(location_id, scheduled_start, scheduled_end)
        })
        .await
    }

    async fn reschedule(
        &self,
        command: RescheduleFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error> {
        let RescheduleFoodTruckScheduleCommand {
            food_truck_id,
            schedule_id,
            scheduled_start,
            scheduled_end,
        } = command;
        self.mutate(food_truck_id, move |food_truck| {
            food_truck.reschedule(schedule_id, scheduled_start, scheduled_end)
        })
        .await
    }

    async fn remove_schedule(
        &self,
        command: RemoveFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error> {
        self.mutate(command.food_truck_id, move |food_truck| {
            food_truck.remove_schedule(command.schedule_id)
        })
        .await
    }

    async fn add_review(&self, command: CreateFoodTruckReviewCommand) -> Result<FoodTruck, Error> {
        let CreateFoodTruckReviewCommand {
            food_truck_id,
            review_date,
            rating,
            details,
        } = command;
        let clock = Arc::clone(&self.clock);
        self.mutate(food_truck_id, move |food_truck| {
            food_truck.add_review(review_date, rating, details, clock.as_ref())
        })
        .await
    }

    async fn remove_review(
        &self,
        command: RemoveFoodTruckReviewCommand,
    ) -> Result<FoodTruck, Error> {
        self.mutate(command.food_truck_id, move |food_truck| {
            food_truck.remove_review(command.review_id)
        })
        .await
    }

    async fn add_social_media_account(
        &self,
        command: AddSocialMediaAccountCommand,
    ) -> Result<FoodTruck, Error> {
        let AddSocialMediaAccountCommand {
            food_truck_id,
            platform_id,
            account_name,
        } = command;
        let platform = self
            .platforms
            .load_by_id(platform_id)
            .await
            .map_err(map_repository_error)?;
        self.mutate(food_truck_id, move |food_truck| {
            food_truck.add_social_media_account(&platform, account_name)
        })
        .await
    }

    async fn remove_social_media_account(
        &self,
        command: RemoveSocialMediaAccountCommand,
    ) -> Result<FoodTruck, Error> {
        self.mutate(command.food_truck_id, move |food_truck| {
            food_truck.remove_social_media_account(command.social_media_account_id)
        })
        .await
    }
}

/// Food truck service implementing the query driving port.
#[derive(Clone)]
pub struct FoodTruckQueryService<F> {
    food_trucks: Arc<F>,
}

impl<F> FoodTruckQueryService<F> {
    /// Create a query service with the food truck repository.
    pub fn new(food_trucks: Arc<F>) -> Self {
        Self { food_trucks }
    }
}

#[async_trait]
impl<F> FoodTruckQuery for FoodTruckQueryService<F>
where
    F: FoodTruckRepository,
{
    async fn get_food_truck(&self, id: FoodTruckId) -> Result<FoodTruck, Error> {
        self.food_trucks
            .load_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_food_trucks(&self) -> Result<Vec<FoodTruck>, Error> {
        self.food_trucks
            .load_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "food_truck_service_tests.rs"]
mod tests;
