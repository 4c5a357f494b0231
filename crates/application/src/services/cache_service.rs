use keystone_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::ports::CacheStore;

/// Typed facade over a [`CacheStore`].
///
/// Values are serialized to JSON on the way in and deserialized on the way
/// out, so any `serde` payload can be cached. The service owns no state of its
/// own; everything lives in the store.
pub struct CacheService {
    store: Arc<dyn CacheStore>,
    default_ttl: Option<Duration>,
}

impl CacheService {
    pub fn new(store: Arc<dyn CacheStore>, default_ttl: Option<Duration>) -> Self {
        Self { store, default_ttl }
    }

    /// Connects the underlying store. Called once at process start.
    pub async fn start(&self) -> Result<(), DomainError> {
        self.store.connect().await?;
        info!(backend = self.store.backend_name(), "Cache connected");
        Ok(())
    }

    /// Releases the store connection. Called once at process shutdown.
    pub async fn stop(&self) -> Result<(), DomainError> {
        self.store.disconnect().await?;
        info!(backend = self.store.backend_name(), "Cache disconnected");
        Ok(())
    }

    /// Looks up `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - The stored value
    /// * `Ok(None)` - If the key is absent or expired
    /// * `Err(DomainError)` - If the store fails or the payload does not decode as `T`
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.store.get(key).await? else {
            debug!("Cache miss");
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| DomainError::Serialization(e.to_string()))
    }

    /// Stores `value` under `key`.
    ///
    /// Without `ttl` the configured default applies; with no default either
    /// the entry does not expire.
    #[instrument(skip(self, value))]
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        let raw =
            serde_json::to_string(value).map_err(|e| DomainError::Serialization(e.to_string()))?;

        self.store.set(key, raw, ttl.or(self.default_ttl)).await
    }

    #[instrument(skip(self))]
    pub async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.store.del(key).await
    }

    /// Clears the entire store. Meant for test teardown and maintenance only:
    /// it removes keys regardless of who wrote them.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), DomainError> {
        self.store.clear().await
    }
}
