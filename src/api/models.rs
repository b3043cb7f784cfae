use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::{EnlistError, FieldError};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<FieldError>,
}

// Newtype wrapper for EnlistError to implement IntoResponse
pub struct ApiError(pub EnlistError);

impl From<EnlistError> for ApiError {
    fn from(err: EnlistError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, detail) = match self.0 {
            EnlistError::InvalidEmail(email) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid email: {}", email),
                Some(FieldError {
                    field: "email".to_string(),
                    title: "email".to_string(),
                    description: "Invalid email format".to_string(),
                }),
            ),
            EnlistError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}", field),
                Some(detail),
            ),
            EnlistError::UnexpectedError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unexpected error: {}", msg),
                None,
            ),
        };
        (
            status,
            Json(ErrorResponse {
                error: error_message,
                detail,
            }),
        )
            .into_response()
    }
}
