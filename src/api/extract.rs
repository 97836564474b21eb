//! Request extractors whose rejections use the API's JSON error format.
//!
//! Axum's stock `Json` and `Path` reject with plaintext bodies and, for JSON,
//! sometimes 415/422. These wrappers turn every rejection into a 400 with an
//! `ErrorResponse` body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::api::middleware::{handle_json_rejection, handle_path_rejection};

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(handle_json_rejection)?;
        Ok(JsonBody(value))
    }
}

/// Typed path parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(handle_path_rejection)?;
        Ok(PathParam(value))
    }
}
