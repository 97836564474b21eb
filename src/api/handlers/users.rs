//! User CRUD request handlers.
//!
//! Mounted under `/api/usuario`.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use uuid::Uuid;

use crate::api::doc::USER_TAG;
use crate::api::dto::{ErrorResponse, UserRequest, UserResponse};
use crate::api::extract::{JsonBody, PathParam};
use crate::error::{AppError, AppResult, ValidationFieldError};
use crate::state::AppState;

/// Base path the user routes are nested under.
pub const USER_BASE_PATH: &str = "/api/usuario";

pub const ID_MISMATCH_MESSAGE: &str = "User ID does not match.";

/// Creates user-related routes.
pub fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_all))
        .routes(routes!(get_by_id))
        .routes(routes!(insert))
        .routes(routes!(update))
        .routes(routes!(delete))
}

/// GET /api/usuario/get - List all users
#[utoipa::path(
    get,
    path = "/get",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "API key missing or invalid", body = String, content_type = "text/plain")
    ),
    security(
        ("ApiKey" = [])
    )
)]
async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.get_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/usuario/get-by/{id} - Get user by ID
#[utoipa::path(
    get,
    path = "/get-by/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 401, description = "API key missing or invalid", body = String, content_type = "text/plain"),
        (status = 404, description = "User not found")
    ),
    security(
        ("ApiKey" = [])
    )
)]
async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .services
        .users
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::user_not_found(id))?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/usuario/insert - Create a user
///
/// Any id in the body is replaced by a server-generated one.
#[utoipa::path(
    post,
    path = "/insert",
    tag = USER_TAG,
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse,
            headers(("Location" = String, description = "URL of the created user"))),
        (status = 400, description = "Validation failed", body = Vec<ValidationFieldError>),
        (status = 401, description = "API key missing or invalid", body = String, content_type = "text/plain")
    ),
    security(
        ("ApiKey" = [])
    )
)]
async fn insert(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UserRequest>,
) -> AppResult<impl IntoResponse> {
    let user = state.services.users.insert(request.into_user()).await?;
    let location = format!("{}/get-by/{}", USER_BASE_PATH, user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

/// PUT /api/usuario/update/{id} - Replace a user's fields
///
/// The body id must equal the path id; an absent body id reads as the nil
/// UUID. Updating an id that matches no user still answers 204.
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "ID mismatch (plaintext) or validation failed (JSON list)", body = Vec<ValidationFieldError>),
        (status = 401, description = "API key missing or invalid", body = String, content_type = "text/plain")
    ),
    security(
        ("ApiKey" = [])
    )
)]
async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
    JsonBody(request): JsonBody<UserRequest>,
) -> AppResult<StatusCode> {
    let user = request.into_user();
    if user.id != id {
        return Err(AppError::BadRequest {
            message: ID_MISMATCH_MESSAGE.to_string(),
        });
    }

    state.services.users.update(user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/usuario/delete/{id} - Delete a user
///
/// Answers 204 whether or not the user existed.
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted or already absent"),
        (status = 401, description = "API key missing or invalid", body = String, content_type = "text/plain")
    ),
    security(
        ("ApiKey" = [])
    )
)]
async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<Uuid>,
) -> AppResult<StatusCode> {
    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
