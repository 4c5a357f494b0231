use async_trait::async_trait;
use keystone_domain::DomainError;
use std::time::Duration;

/// Key-value store backing the cache accessor.
///
/// Values cross this boundary as JSON text; expiry is enforced by the store.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Opens the connection to the underlying store.
    async fn connect(&self) -> Result<(), DomainError>;

    /// Returns the stored value, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// With `ttl`, the entry must expire no later than `ttl` after the write.
    async fn set(&self, key: &str, value: String, ttl: Option<Duration>)
        -> Result<(), DomainError>;

    /// Removes `key`. Absent keys are not an error.
    async fn del(&self, key: &str) -> Result<(), DomainError>;

    /// Removes every key in the store.
    async fn clear(&self) -> Result<(), DomainError>;

    /// Releases the connection. Later calls fail with `CacheUnavailable`.
    async fn disconnect(&self) -> Result<(), DomainError>;

    /// Short backend name used in log events.
    fn backend_name(&self) -> &'static str;
}
