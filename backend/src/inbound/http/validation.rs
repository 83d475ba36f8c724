//! Extractor configuration turning malformed requests into domain errors.
//!
//! Without these, Actix answers bad JSON or non-numeric path keys with a
//! plain-text 400; with them every client error shares the JSON error shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::web;
use serde_json::json;

use crate::domain::Error;

fn malformed_body(error: &JsonPayloadError) -> Error {
    Error::invalid_request(format!("malformed request body: {error}"))
        .with_details(json!({ "code": "malformed_body" }))
}

fn malformed_path(error: &PathError) -> Error {
    Error::invalid_request(format!("malformed path parameter: {error}"))
        .with_details(json!({ "code": "malformed_path" }))
}

/// JSON extractor configuration for all API routes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _request| malformed_body(&error).into())
}

/// Path extractor configuration for all API routes.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|error, _request| malformed_path(&error).into())
}
