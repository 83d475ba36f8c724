//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    FoodTruckCommand, FoodTruckQuery, MockFoodTruckCommand, MockFoodTruckQuery,
    MockReferenceDataCommand, MockReferenceDataQuery, ReferenceDataCommand, ReferenceDataQuery,
};
use crate::inbound::http::state::HttpState;

/// State with the given food truck ports and unused reference data mocks.
pub fn state_with(
    food_trucks: Arc<dyn FoodTruckCommand>,
    food_trucks_query: Arc<dyn FoodTruckQuery>,
) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        food_trucks,
        food_trucks_query,
        reference_data: Arc::new(MockReferenceDataCommand::new()),
        reference_data_query: Arc::new(MockReferenceDataQuery::new()),
    })
}

/// State with the given reference data ports and unused food truck mocks.
pub fn reference_state_with(
    reference_data: Arc<dyn ReferenceDataCommand>,
    reference_data_query: Arc<dyn ReferenceDataQuery>,
) -> web::Data<HttpState> {
    web::Data::new(HttpState {
        food_trucks: Arc::new(MockFoodTruckCommand::new()),
        food_trucks_query: Arc::new(MockFoodTruckQuery::new()),
        reference_data,
        reference_data_query,
    })
}
