use async_trait::async_trait;
use keystone_application::ports::UserRepository;
use crate::database::map_sqlx_error;
use keystone_domain::{DomainError, User};
use sqlx::PgPool;
use tracing::{error, instrument};

type UserRow = (i64, String, Option<String>);

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: UserRow) -> User {
        let (id, email, name) = row;
        User { id, email, name }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_many(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, email, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to query users");
                map_sqlx_error("query users", e)
            })?;

        Ok(rows.into_iter().map(Self::row_to_user).collect())
    }
}
