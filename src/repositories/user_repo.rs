//! User repository for async database operations.
//!
//! Provides CRUD operations for the `usuarios` table using diesel_async.
//! All statements are built with the diesel query builder, so values are
//! always sent as bind parameters.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppResult, DatabaseErrorConverter};
use crate::models::User;
use crate::repositories::UserStore;

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). Each operation checks out its own
/// connection and hands it back when the statement completes.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        use crate::schema::usuarios::dsl::*;
        let mut conn = self.pool.get().await?;

        usuarios
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list users"))
    }

    async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        use crate::schema::usuarios::dsl::*;
        let mut conn = self.pool.get().await?;

        usuarios
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find user"))
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        use crate::schema::usuarios::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(usuarios)
            .values(user)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert user"))
    }

    async fn update(&self, user: &User) -> AppResult<usize> {
        use crate::schema::usuarios::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(usuarios.filter(id.eq(user.id)))
            .set(user)
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update user"))?;

        if affected == 0 {
            tracing::debug!(user_id = %user.id, "Update matched no rows");
        }
        Ok(affected)
    }

    async fn delete(&self, user_id: Uuid) -> AppResult<usize> {
        use crate::schema::usuarios::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(usuarios.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete user"))
    }
}
