use crate::{
    api::models::{ApiError, CreateUserRequest, ErrorResponse},
    core::{
        models::user::{NewUser, RegisteredUser},
        service::EnlistService,
    },
};
use axum::{Json, Router, extract::State, http::StatusCode};
use std::sync::Arc;

// Define API routes
pub fn api_routes(service: Arc<EnlistService>) -> Router {
    Router::new()
        .route("/users/", axum::routing::post(create_user))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisteredUser),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Arc<EnlistService>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<RegisteredUser>), ApiError> {
    // Missing or mistyped fields never reach this point; the Json extractor
    // rejects them with a 422 before the handler runs.
    let new_user = NewUser {
        username: req.username,
        email: req.email,
        password: req.password,
        full_name: req.full_name,
    };
    let registered = service.register(new_user).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}
