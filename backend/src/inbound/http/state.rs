//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on the driving ports and stay testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    FoodTruckCommand, FoodTruckQuery, FoodTruckRepository, LocationRepository,
    ReferenceDataCommand, ReferenceDataQuery, SocialMediaPlatformRepository, TagRepository,
};
use crate::domain::{FoodTruckCommandService, FoodTruckQueryService, ReferenceDataService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub food_trucks: Arc<dyn FoodTruckCommand>,
    pub food_trucks_query: Arc<dyn FoodTruckQuery>,
    pub reference_data: Arc<dyn ReferenceDataCommand>,
    pub reference_data_query: Arc<dyn ReferenceDataQuery>,
}

impl HttpState {
    /// Wire the domain services over one set of repositories.
    pub fn from_repositories<F, T, L, P>(
        food_trucks: Arc<F>,
        tags: Arc<T>,
        locations: Arc<L>,
        platforms: Arc<P>,
        clock: Arc<dyn Clock>,
    ) -> Self
    where
        F: FoodTruckRepository + 'static,
        T: TagRepository + 'static,
        L: LocationRepository + 'static,
        P: SocialMediaPlatformRepository + 'static,
    {
        let reference_data = Arc::new(ReferenceDataService::new(
            tags.clone(),
            locations.clone(),
            platforms.clone(),
        ));
        Self {
            food_trucks: Arc::new(FoodTruckCommandService::new(
                food_trucks.clone(),
                tags,
                locations,
                platforms,
                clock,
            )),
            food_trucks_query: Arc::new(FoodTruckQueryService::new(food_trucks)),
            reference_data: reference_data.clone(),
            reference_data_query: reference_data,
        }
    }
}
