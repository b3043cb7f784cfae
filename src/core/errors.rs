use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Field-level diagnostic attached to a validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum EnlistError {
    /// Email format is invalid
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Catch-all for unexpected errors
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}
