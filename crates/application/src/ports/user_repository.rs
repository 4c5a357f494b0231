use async_trait::async_trait;
use keystone_domain::{DomainError, User};

/// Read access to the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Retrieves every user.
    ///
    /// # Errors
    ///
    /// * `DomainError::DatabaseError` - If the query fails
    async fn find_many(&self) -> Result<Vec<User>, DomainError>;
}
