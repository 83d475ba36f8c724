//! Driving port for food truck mutations.
//!
//! Inbound adapters translate their request shapes into the commands in
//! [`crate::domain::commands`] and hand them to this port. Every method
//! returns the aggregate as stored after the change.

use async_trait::async_trait;

use crate::domain::commands::{
    AddFoodTruckTagCommand, AddSocialMediaAccountCommand, CreateFoodTruckCommand,
    CreateFoodTruckReviewCommand, CreateFoodTruckScheduleCommand, DeleteFoodTruckCommand,
    RemoveFoodTruckReviewCommand, RemoveFoodTruckScheduleCommand, RemoveFoodTruckTagCommand,
    RemoveSocialMediaAccountCommand, RescheduleFoodTruckScheduleCommand, UpdateFoodTruckCommand,
};
use crate::domain::{Error, FoodTruck};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodTruckCommand: Send + Sync {
    async fn create_food_truck(&self, command: CreateFoodTruckCommand)
    -> Result<FoodTruck, Error>;

    async fn update_food_truck(&self, command: UpdateFoodTruckCommand)
    -> Result<FoodTruck, Error>;

    async fn delete_food_truck(&self, command: DeleteFoodTruckCommand) -> Result<(), Error>;

    async fn add_tag(&self, command: AddFoodTruckTagCommand) -> Result<FoodTruck, Error>;

    async fn remove_tag(&self, command: RemoveFoodTruckTagCommand) -> Result<FoodTruck, Error>;

    async fn add_schedule(
        &self,
        command: CreateFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error>;

    async fn reschedule(
        &self,
        command: RescheduleFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error>;

    async fn remove_schedule(
        &self,
        command: RemoveFoodTruckScheduleCommand,
    ) -> Result<FoodTruck, Error>;

    async fn add_review(&self, command: CreateFoodTruckReviewCommand)
    -> Result<FoodTruck, Error>;

    async fn remove_review(&self, command: RemoveFoodTruckReviewCommand)
    -> Result<FoodTruck, Error>;

    async fn add_social_media_account(
        &self,
        command: AddSocialMediaAccountCommand,
    ) -> Result<FoodTruck, Error>;

    async fn remove_social_media_account(
        &self,
        command: RemoveSocialMediaAccountCommand,
    ) -> Result<FoodTruck, Error>;
}
