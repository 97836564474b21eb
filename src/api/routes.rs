//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::timeout::TimeoutLayer;
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::{ApiDoc, OPENAPI_JSON_PATH, SecurityAddon};
use crate::api::handlers::users::{USER_BASE_PATH, user_routes};
use crate::api::middleware::{
    DOCS_PATH_PREFIX, api_key_middleware, logging_middleware, request_id_middleware,
};
use crate::config::ServerConfig;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Timeout (outermost) - answers 408 after `server.request_timeout`
/// 2. Request ID - generates/propagates request IDs
/// 3. Logging - logs requests with request IDs
/// 4. API key gate - rejects unauthorized requests before any handler
///
/// # Routes
/// - `/api/usuario/*` - User CRUD operations
/// - `/swagger`, `/swagger/v1/swagger.json` - docs, when `server.enable_docs`
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let (router, mut openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(USER_BASE_PATH, user_routes())
        .split_for_parts();
    SecurityAddon::new(&state.api_key.header).modify(&mut openapi);

    let router = if server.enable_docs {
        router.merge(SwaggerUi::new(DOCS_PATH_PREFIX).url(OPENAPI_JSON_PATH, openapi))
    } else {
        router
    };

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout),
        ))
        .with_state(state)
}
