use keystone_application::services::CacheService;
use tracing::{error, info};

pub async fn init_cache(cache: &CacheService) -> anyhow::Result<()> {
    info!("Initializing cache");

    cache.start().await.map_err(|e| {
        error!("Failed to initialize cache: {}", e);
        anyhow::anyhow!(e)
    })
}

pub async fn shutdown_cache(cache: &CacheService) {
    if let Err(e) = cache.stop().await {
        error!(error = %e, "Cache disconnect failed");
    }
}
