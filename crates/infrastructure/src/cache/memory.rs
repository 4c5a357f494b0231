use async_trait::async_trait;
use dashmap::DashMap;
use keystone_application::ports::CacheStore;
use keystone_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

const DEFAULT_SWEEP_THRESHOLD: usize = 1024;

/// In-process cache store.
///
/// Expired entries are dropped on read, and by a sweep that runs on `set`
/// once the map grows past a threshold. The threshold doubles relative to
/// the surviving entries after each sweep. Nothing runs in the background.
/// Intended for local runs and tests, not for sharing state between instances.
pub struct MemoryCacheStore {
    entries: DashMap<String, MemoryEntry>,
    connected: AtomicBool,
    min_sweep_at: usize,
    sweep_at: AtomicUsize,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::with_sweep_threshold(DEFAULT_SWEEP_THRESHOLD)
    }

    /// Store whose first sweep runs once it holds `threshold` entries.
    pub fn with_sweep_threshold(threshold: usize) -> Self {
        let threshold = threshold.max(1);
        Self {
            entries: DashMap::new(),
            connected: AtomicBool::new(false),
            min_sweep_at: threshold,
            sweep_at: AtomicUsize::new(threshold),
        }
    }

    /// Number of stored entries, expired ones included until read or swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sweep_if_due(&self, now: Instant) {
        if self.entries.len() < self.sweep_at.load(Ordering::Relaxed) {
            return;
        }

        self.entries.retain(|_, entry| !entry.is_expired(now));
        let next = self.entries.len().saturating_mul(2).max(self.min_sweep_at);
        self.sweep_at.store(next, Ordering::Relaxed);
    }

    fn ensure_connected(&self) -> Result<(), DomainError> {
        if self.connected.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(DomainError::CacheUnavailable(
                "memory cache not started".to_string(),
            ))
        }
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn connect(&self) -> Result<(), DomainError> {
        self.connected.store(true, Ordering::Release);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.ensure_connected()?;

        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired(now) {
                return Ok(Some(entry.value.clone()));
            }
        }

        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> Result<(), DomainError> {
        self.ensure_connected()?;

        let now = Instant::now();
        self.sweep_if_due(now);

        let expires_at = ttl.map(|ttl| now + ttl);
        self.entries
            .insert(key.to_string(), MemoryEntry { value, expires_at });
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.ensure_connected()?;
        self.entries.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.ensure_connected()?;
        self.entries.clear();
        self.sweep_at.store(self.min_sweep_at, Ordering::Relaxed);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DomainError> {
        self.connected.store(false, Ordering::Release);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
