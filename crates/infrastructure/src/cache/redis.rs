//! Redis cache store
//!
//! Values are stored as plain strings; expiry uses `SET ... PX` so the
//! server owns the TTL. One multiplexed connection is opened by `connect`
//! and shared by every call until `disconnect`.

use async_trait::async_trait;
use keystone_application::ports::CacheStore;
use keystone_domain::config::CacheConfig;
use keystone_domain::DomainError;
use redis::aio::MultiplexedConnection;
use redis::{Client, RedisError};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

pub struct RedisCacheStore {
    client: Client,
    connection: RwLock<Option<MultiplexedConnection>>,
}

impl RedisCacheStore {
    /// Creates the client without touching the network.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379/0")
    pub fn new(url: &str) -> Result<Self, DomainError> {
        let client = Client::open(url)
            .map_err(|e| DomainError::CacheError(format!("Invalid Redis URL: {}", e)))?;

        Ok(Self {
            client,
            connection: RwLock::new(None),
        })
    }

    pub fn from_config(cfg: &CacheConfig) -> Result<Self, DomainError> {
        Self::new(&cfg.redis_url())
    }

    async fn connection(&self) -> Result<MultiplexedConnection, DomainError> {
        self.connection
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::CacheUnavailable("Redis connection not started".to_string()))
    }
}

fn map_redis_error(op: &str, e: RedisError) -> DomainError {
    if e.is_io_error() || e.is_connection_dropped() {
        DomainError::CacheUnavailable(format!("Redis {} failed: {}", op, e))
    } else {
        DomainError::CacheError(format!("Redis {} failed: {}", op, e))
    }
}

/// Milliseconds for `PX`; sub-millisecond TTLs round up so they still expire.
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn connect(&self) -> Result<(), DomainError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| DomainError::CacheUnavailable(format!("Redis connect failed: {}", e)))?;

        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("PING", e))?;

        *self.connection.write().await = Some(conn);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let mut conn = self.connection().await?;

        redis::cmd("GET")
            .arg(key)
            .query_async::<Option<String>>(&mut conn)
            .await
            .map_err(|e| map_redis_error("GET", e))
    }

    #[instrument(skip(self, value))]
    async fn set(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(ttl_millis(ttl));
        }

        cmd.query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("SET", e))
    }

    #[instrument(skip(self))]
    async fn del(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;

        let removed = redis::cmd("DEL")
            .arg(key)
            .query_async::<i64>(&mut conn)
            .await
            .map_err(|e| map_redis_error("DEL", e))?;

        debug!(removed, "Redis DEL");
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;

        redis::cmd("FLUSHDB")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("FLUSHDB", e))
    }

    async fn disconnect(&self) -> Result<(), DomainError> {
        // The socket closes once the last clone of the connection is dropped.
        self.connection.write().await.take();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("backend", &self.backend_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_millis_rounds_up_to_one() {
        assert_eq!(ttl_millis(Duration::from_micros(10)), 1);
        assert_eq!(ttl_millis(Duration::from_millis(1000)), 1000);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(RedisCacheStore::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_calls_before_connect_are_unavailable() {
        let store = RedisCacheStore::new("redis://127.0.0.1:6379/0").unwrap();
        let result = store.get("k").await;
        assert!(matches!(result, Err(DomainError::CacheUnavailable(_))));
    }
}
