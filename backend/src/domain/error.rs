//! Transport-agnostic failure returned by the driving ports.
//!
//! Services fold validation and repository failures into [`Error`]; the
//! HTTP adapter picks a status from its [`ErrorCode`] and serialises the
//! rest as the response body.

use serde::Serialize;
use serde_json::{Value, json};

use super::ValidationError;

/// Failure category, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed input or a broken business rule.
    InvalidRequest,
    NotFound,
    /// Stale write, duplicate value or a reference still in use.
    Conflict,
    ServiceUnavailable,
    InternalError,
}

/// Failure reported to callers of the food truck and reference data ports.
///
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("food truck 4 not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "food truck 4 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable extras, e.g. `{"code": "invalid_time_range"}`.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ValidationError> for Error {
    fn from(value: ValidationError) -> Self {
        Self::invalid_request(value.to_string()).with_details(json!({ "code": value.code() }))
    }
}

#[cfg(test)]
mod tests;
