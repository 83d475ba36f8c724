//! HTTP inbound adapter exposing the directory as a JSON API.
//!
//! Handlers translate request models into commands, call the driving ports
//! held in [`state::HttpState`] and render domain entities as response
//! models. [`api_scope`] mounts everything under `/api/v1`.

pub mod error;
pub mod food_trucks;
pub mod health;
pub mod models;
pub mod reference_data;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod translation;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The versioned API scope with extractor error handling attached.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(validation::json_config())
        .app_data(validation::path_config())
        .configure(food_trucks::configure)
        .configure(reference_data::configure)
}
