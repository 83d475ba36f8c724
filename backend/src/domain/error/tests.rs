//! Tests for the domain error payload.

use super::*;
use crate::domain::validation::AddressField;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "bad");
}

#[rstest]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::conflict("stale"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_codes(#[case] err: Error, #[case] code: ErrorCode) {
    assert_eq!(err.code(), code);
}

#[rstest]
fn validation_errors_carry_their_code() {
    let err = Error::from(ValidationError::EmptyAddressField {
        field: AddressField::ZipCode,
    });
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "location zipCode must not be empty");
    assert_eq!(err.details(), Some(&json!({ "code": "empty_address_field" })));
}

#[rstest]
fn serialises_to_camel_case_without_empty_details() {
    let value = serde_json::to_value(Error::conflict("stale")).expect("serialise error");
    assert_eq!(value, json!({ "code": "conflict", "message": "stale" }));
}

#[rstest]
fn details_are_serialised_when_present() {
    let value = serde_json::to_value(
        Error::invalid_request("bad window").with_details(json!({ "code": "invalid_time_range" })),
    )
    .expect("serialise error");
    assert_eq!(value["details"]["code"], "invalid_time_range");
}
