#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use keystone_api::{create_api_routes, AppState};
use keystone_application::ports::{CacheStore, UserRepository};
use keystone_application::services::CacheService;
use keystone_application::use_cases::GetGreetingUseCase;
use keystone_domain::{DomainError, User};
use keystone_infrastructure::cache::MemoryCacheStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock UserRepository
// ============================================================================

#[derive(Default)]
pub struct MockUserRepository {
    should_fail: AtomicBool,
    unavailable: AtomicBool,
}

impl MockUserRepository {
    pub fn failing() -> Self {
        Self {
            should_fail: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: AtomicBool::new(true),
            ..Self::default()
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_many(&self) -> Result<Vec<User>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseUnavailable(
                "pool timed out while waiting for an open connection".to_string(),
            ));
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "relation \"users\" does not exist".to_string(),
            ));
        }
        Ok(vec![User {
            id: 1,
            email: "seed@example.com".to_string(),
            name: Some("Seed".to_string()),
        }])
    }
}

// ============================================================================
// App assembly
// ============================================================================

pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<MemoryCacheStore>,
    pub cache: Arc<CacheService>,
}

pub async fn build_app(repo: MockUserRepository) -> TestApp {
    let store = Arc::new(MemoryCacheStore::new());
    let cache = Arc::new(CacheService::new(store.clone() as Arc<dyn CacheStore>, None));
    cache.start().await.unwrap();

    let get_greeting = Arc::new(GetGreetingUseCase::new(Arc::new(repo), cache.clone()));
    let router = create_api_routes(AppState { get_greeting });

    TestApp {
        router,
        store,
        cache,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
