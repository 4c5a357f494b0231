pub mod memory;
pub mod redis;

pub use memory::MemoryCacheStore;
pub use self::redis::RedisCacheStore;

use keystone_application::ports::CacheStore;
use keystone_domain::config::{CacheBackend, CacheConfig};
use keystone_domain::DomainError;
use std::sync::Arc;

/// Builds the store selected by `cache.backend`. No connection is opened here.
pub fn create_cache_store(cfg: &CacheConfig) -> Result<Arc<dyn CacheStore>, DomainError> {
    match cfg.backend {
        CacheBackend::Redis => Ok(Arc::new(RedisCacheStore::from_config(cfg)?)),
        CacheBackend::Memory => Ok(Arc::new(MemoryCacheStore::new())),
    }
}
