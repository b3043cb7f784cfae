use crate::api::models::{ApiError, CreateUserRequest};
use crate::core::errors::{EnlistError, FieldError};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[test]
fn test_request_rejects_missing_password() {
    let result = serde_json::from_str::<CreateUserRequest>(
        r#"{"username":"alice","email":"alice@example.com"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_request_rejects_missing_username() {
    let result = serde_json::from_str::<CreateUserRequest>(
        r#"{"email":"alice@example.com","password":"secret"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_request_rejects_non_text_username() {
    let result = serde_json::from_str::<CreateUserRequest>(
        r#"{"username":42,"email":"alice@example.com","password":"secret"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_request_full_name_defaults_to_none() {
    let req = serde_json::from_str::<CreateUserRequest>(
        r#"{"username":"alice","email":"alice@example.com","password":"secret"}"#,
    )
    .unwrap();
    assert!(req.full_name.is_none());
}

#[test]
fn test_request_accepts_full_name() {
    let req = serde_json::from_str::<CreateUserRequest>(
        r#"{"username":"alice","email":"alice@example.com","password":"secret","full_name":"Alice A"}"#,
    )
    .unwrap();
    assert_eq!(req.full_name.as_deref(), Some("Alice A"));
}

#[test]
fn test_invalid_email_maps_to_bad_request() {
    let response = ApiError(EnlistError::InvalidEmail("not-an-email".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_invalid_input_maps_to_bad_request() {
    let error = EnlistError::InvalidInput(
        "username".to_string(),
        FieldError {
            field: "username".to_string(),
            title: "length".to_string(),
            description: "Username cannot be empty".to_string(),
        },
    );
    let response = ApiError(error).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_unexpected_error_maps_to_internal_server_error() {
    let response = ApiError(EnlistError::UnexpectedError("boom".to_string())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
