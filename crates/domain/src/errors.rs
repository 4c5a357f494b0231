use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Cache miss for key: {0}")]
    CacheMiss(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    /// True when the failure comes from a backing store that cannot be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DomainError::DatabaseUnavailable(_) | DomainError::CacheUnavailable(_)
        )
    }
}
