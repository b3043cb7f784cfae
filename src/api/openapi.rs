use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse},
    core::{errors::FieldError, models::user::RegisteredUser},
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::create_user),
    components(schemas(CreateUserRequest, ErrorResponse, FieldError, RegisteredUser)),
    info(
        title = "Enlist API",
        description = "API for validating and echoing user registrations",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
