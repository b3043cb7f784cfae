use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

/// Incoming registration data. The password is consumed during registration
/// and never copied into the outgoing representation.
#[derive(Clone, Debug, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
    pub full_name: Option<String>,
}

/// Outgoing representation of a registered user. The type has no password
/// field, so serialization cannot leak one even if a caller upstream tried.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    /// Server time at the moment of registration, never client-supplied.
    pub join_date: DateTime<Utc>,
}
