use crate::core::errors::{EnlistError, FieldError};
use crate::core::models::user::{NewUser, RegisteredUser};
use chrono::Utc;
use tracing::info;
use validator::Validate;

/// Stateless registration service. Every call is independent; nothing is
/// retained between requests.
#[derive(Default)]
pub struct EnlistService;

impl EnlistService {
    pub fn new() -> Self {
        EnlistService
    }

    /// Validates the registration data and echoes it back without the
    /// password, stamped with the server time of handling.
    pub async fn register(&self, new_user: NewUser) -> Result<RegisteredUser, EnlistError> {
        self.validate(&new_user)?;

        let registered = RegisteredUser {
            username: new_user.username,
            email: new_user.email,
            full_name: new_user.full_name,
            join_date: Utc::now(),
        };
        info!(username = %registered.username, "user registered");
        Ok(registered)
    }

    fn validate(&self, new_user: &NewUser) -> Result<(), EnlistError> {
        let Err(errors) = new_user.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();
        if field_errors.contains_key("email") {
            return Err(EnlistError::InvalidEmail(new_user.email.clone()));
        }
        for (field, entries) in field_errors {
            let Some(entry) = entries.first() else {
                continue;
            };
            let description = entry
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            return Err(EnlistError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: entry.code.to_string(),
                    description,
                },
            ));
        }
        Err(EnlistError::UnexpectedError(
            "validation failed without field details".to_string(),
        ))
    }
}
