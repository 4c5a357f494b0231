use keystone_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::ports::UserRepository;
use crate::services::CacheService;

pub const GREETING_KEY: &str = "key";
pub const GREETING_VALUE: &str = "VALUE FROM CACHE";
pub const GREETING_TTL: Duration = Duration::from_millis(1000);

const CONTEXT: &str = "GetGreetingUseCase";

/// Writes a fixed value into the cache and reads it straight back.
///
/// The user query only exercises the database connection; its rows are not
/// used. Every key is shared process-wide, so concurrent callers race on it.
pub struct GetGreetingUseCase {
    user_repo: Arc<dyn UserRepository>,
    cache: Arc<CacheService>,
}

impl GetGreetingUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, cache: Arc<CacheService>) -> Self {
        Self { user_repo, cache }
    }

    #[instrument(skip(self), name = "get_greeting")]
    pub async fn execute(&self) -> Result<String, DomainError> {
        info!(context = CONTEXT, "calling log from inside get_greeting");

        let users = self.user_repo.find_many().await?;
        debug!(count = users.len(), "Users loaded");

        self.cache
            .set(GREETING_KEY, GREETING_VALUE, Some(GREETING_TTL))
            .await?;

        self.cache
            .get::<String>(GREETING_KEY)
            .await?
            .ok_or_else(|| DomainError::CacheMiss(GREETING_KEY.to_string()))
    }
}
