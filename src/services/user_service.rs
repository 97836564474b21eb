//! User service for business logic operations.
//!
//! Enforces validate-before-write for inserts and updates and passes reads
//! and deletes straight through to the store.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::repositories::UserStore;
use crate::services::validate_user;

/// User service for handling user-related business logic.
///
/// Holds the store behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new UserService with the given store.
    pub fn new(repo: Arc<dyn UserStore>) -> Self {
        Self { repo }
    }

    /// Lists all users.
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.repo.list_all().await
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// Validates and stores a new user.
    ///
    /// Any id on `candidate` is discarded and replaced with a fresh v4 UUID.
    ///
    /// # Returns
    /// The user as stored, including its generated id
    ///
    /// # Errors
    /// `AppError::ValidationErrors` if any field rule fails; nothing is written.
    pub async fn insert(&self, candidate: User) -> AppResult<User> {
        Self::ensure_valid(&candidate)?;

        let user = User {
            id: Uuid::new_v4(),
            ..candidate
        };
        self.repo.insert(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Validates and replaces an existing user's fields.
    ///
    /// An id that matches no row is not an error.
    ///
    /// # Errors
    /// `AppError::ValidationErrors` if any field rule fails; nothing is written.
    pub async fn update(&self, user: User) -> AppResult<()> {
        Self::ensure_valid(&user)?;

        let affected = self.repo.update(&user).await?;
        tracing::info!(user_id = %user.id, affected, "User updated");
        Ok(())
    }

    /// Deletes a user. Deleting a missing id is not an error.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let affected = self.repo.delete(id).await?;
        tracing::info!(user_id = %id, affected, "User deleted");
        Ok(())
    }

    fn ensure_valid(user: &User) -> AppResult<()> {
        let errors = validate_user(user);
        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(error_count = errors.len(), "User validation failed");
            Err(AppError::ValidationErrors { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store that records the calls it receives.
    #[derive(Default)]
    struct RecordingStore {
        users: Mutex<Vec<User>>,
        inserts: Mutex<Vec<User>>,
        updates: Mutex<Vec<User>>,
        deletes: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl UserStore for RecordingStore {
        async fn list_all(&self) -> AppResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
            Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn insert(&self, user: &User) -> AppResult<()> {
            self.inserts.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn update(&self, user: &User) -> AppResult<usize> {
            self.updates.lock().unwrap().push(user.clone());
            Ok(1)
        }

        async fn delete(&self, id: Uuid) -> AppResult<usize> {
            self.deletes.lock().unwrap().push(id);
            Ok(0)
        }
    }

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: "teste@teste.com".to_string(),
            password: "123456".to_string(),
        }
    }

    fn service() -> (UserService, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore::default());
        (UserService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_get_all_returns_store_contents() {
        let (service, store) = service();
        let expected = vec![user("Teste")];
        *store.users.lock().unwrap() = expected.clone();

        assert_eq!(service.get_all().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let (service, _) = service();
        assert!(service.get_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        let (service, store) = service();
        let candidate = user("Teste");
        let client_id = candidate.id;

        let created = service.insert(candidate).await.unwrap();

        assert_ne!(created.id, client_id);
        assert_ne!(created.id, Uuid::nil());
        assert_eq!(created.name, "Teste");
        let inserts = store.inserts.lock().unwrap();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0], created);
    }

    #[tokio::test]
    async fn test_insert_invalid_writes_nothing() {
        let (service, store) = service();

        let result = service.insert(user("")).await;

        match result {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
            }
            other => panic!("Expected ValidationErrors, got {:?}", other),
        }
        assert!(store.inserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_passes_user_through() {
        let (service, store) = service();
        let target = user("Teste");

        service.update(target.clone()).await.unwrap();

        assert_eq!(*store.updates.lock().unwrap(), vec![target]);
    }

    #[tokio::test]
    async fn test_update_invalid_writes_nothing() {
        let (service, store) = service();
        let mut target = user("Teste");
        target.email = "not-an-email".to_string();

        let result = service.update(target).await;

        assert!(matches!(result, Err(AppError::ValidationErrors { .. })));
        assert!(store.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let (service, store) = service();
        let id = Uuid::new_v4();

        service.delete(id).await.unwrap();

        assert_eq!(*store.deletes.lock().unwrap(), vec![id]);
    }
}
