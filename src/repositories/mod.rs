//! Repository layer for data access operations.
//!
//! `UserStore` is the persistence port the service layer talks to;
//! `UserRepository` is its PostgreSQL adapter.

mod user_repo;

pub use user_repo::UserRepository;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::User;

/// Persistence operations for the user table.
///
/// Every call is a single statement. Missing rows are never an error:
/// lookups return `None` and writes report the affected row count.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every stored user, in no particular order.
    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Returns the user with the given id, if any.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Appends a new row. Fails with `AppError::Duplicate` when the id is taken.
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// Replaces name, email and password of the row matching `user.id`.
    async fn update(&self, user: &User) -> AppResult<usize>;

    /// Removes the row with the given id.
    async fn delete(&self, id: Uuid) -> AppResult<usize>;
}

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserStore>,
}

impl Repositories {
    /// Creates the PostgreSQL-backed repositories.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self::with_user_store(Arc::new(UserRepository::new(pool)))
    }

    /// Creates the repositories around an arbitrary user store.
    pub fn with_user_store(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
