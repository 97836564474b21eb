//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use tower::ServiceExt;
use uuid::Uuid;

use usuario_api::AppState;
use usuario_api::api::create_router;
use usuario_api::config::{ApiKeyConfig, ServerConfig};
use usuario_api::error::{AppError, AppResult};
use usuario_api::models::User;
use usuario_api::repositories::{Repositories, UserStore};

pub const API_KEY_HEADER: &str = "X-Api-Key";
pub const API_KEY: &str = "test-key";

/// `UserStore` kept in process memory, keyed by id.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<BTreeMap<Uuid, User>>,
    /// Added before `list_all` answers
    list_delay: Duration,
}

impl InMemoryUserStore {
    pub fn with_list_delay(list_delay: Duration) -> Self {
        Self {
            list_delay,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.id) {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: user.id.to_string(),
            });
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<usize> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<usize> {
        Ok(self.users.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

/// Router wired to a fresh in-memory store, plus the store for inspection.
pub fn test_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::default());
    (app_with(store.clone(), &ServerConfig::default()), store)
}

/// Router over the given store and server settings.
pub fn app_with(store: Arc<InMemoryUserStore>, server: &ServerConfig) -> Router {
    let api_key = ApiKeyConfig {
        header: API_KEY_HEADER.to_string(),
        secret: API_KEY.to_string(),
    };
    let state = AppState::from_repositories(Repositories::with_user_store(store), api_key);
    create_router(state, server)
}

pub fn authorized(method: &str, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(API_KEY_HEADER, API_KEY)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    authorized(method, uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
