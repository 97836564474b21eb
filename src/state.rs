//! Application state for Axum web framework.
//!
//! Contains shared services and configuration that are accessible
//! across all request handlers and middleware.

use crate::config::ApiKeyConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap since services hold their stores behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Header name and secret checked by the API key gate
    pub api_key: ApiKeyConfig,
}

impl AppState {
    /// Creates a new AppState backed by PostgreSQL.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, settings.api_key.clone());
    /// ```
    pub fn new(pool: AsyncDbPool, api_key: ApiKeyConfig) -> Self {
        Self::from_repositories(Repositories::new(pool), api_key)
    }

    /// Creates an AppState around already-built repositories.
    pub fn from_repositories(repos: Repositories, api_key: ApiKeyConfig) -> Self {
        Self {
            services: Services::new(repos),
            api_key,
        }
    }
}
