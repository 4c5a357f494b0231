use keystone_application::services::CacheService;
use keystone_domain::Config;
use keystone_infrastructure::cache::create_cache_store;
use keystone_infrastructure::database::Database;
use std::sync::Arc;

/// Connection-owning components. Nothing here touches the network until started.
pub struct Services {
    pub database: Arc<Database>,
    pub cache: Arc<CacheService>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let database = Arc::new(Database::new(&config.database)?);

        let store = create_cache_store(&config.cache)?;
        let cache = Arc::new(CacheService::new(store, config.cache.default_ttl()));

        Ok(Self { database, cache })
    }
}
