#![allow(dead_code)]

use async_trait::async_trait;
use keystone_application::ports::{CacheStore, UserRepository};
use keystone_domain::{DomainError, User};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock UserRepository
// ============================================================================

#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        repo.users.try_write().unwrap().extend(users);
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_many(&self) -> Result<Vec<User>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }
        Ok(self.users.read().await.clone())
    }
}

pub fn make_user(id: i64, email: &str) -> User {
    User {
        id,
        email: email.to_string(),
        name: None,
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

/// Records every write so tests can inspect the TTL that reached the store.
#[derive(Clone)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    ttls: Arc<RwLock<HashMap<String, Option<Duration>>>>,
    connected: Arc<RwLock<bool>>,
    should_fail: Arc<RwLock<bool>>,
    drop_writes: Arc<RwLock<bool>>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttls: Arc::new(RwLock::new(HashMap::new())),
            connected: Arc::new(RwLock::new(true)),
            should_fail: Arc::new(RwLock::new(false)),
            drop_writes: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    /// Accept writes without storing them, as if every entry expired at once.
    pub async fn set_drop_writes(&self, drop_writes: bool) {
        *self.drop_writes.write().await = drop_writes;
    }

    pub async fn insert_raw(&self, key: &str, raw: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), raw.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Option<Duration>> {
        self.ttls.read().await.get(key).copied()
    }

    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn check(&self) -> Result<(), DomainError> {
        if !*self.connected.read().await {
            return Err(DomainError::CacheUnavailable("not connected".to_string()));
        }
        if *self.should_fail.read().await {
            return Err(DomainError::CacheError("Mock cache failed".to_string()));
        }
        Ok(())
    }
}

impl Default for MockCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn connect(&self) -> Result<(), DomainError> {
        *self.connected.write().await = true;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check().await?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        self.check().await?;
        self.ttls.write().await.insert(key.to_string(), ttl);
        if !*self.drop_writes.read().await {
            self.entries.write().await.insert(key.to_string(), value);
        }
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.check().await?;
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.check().await?;
        self.entries.write().await.clear();
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DomainError> {
        *self.connected.write().await = false;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
