use keystone_domain::config::DatabaseConfig;
use keystone_domain::DomainError;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Bookkeeping table written by the migrator; never truncated.
pub const MIGRATIONS_TABLE: &str = "_sqlx_migrations";

/// Builds a pool that connects on first use.
pub fn create_pool(cfg: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&cfg.url)?;

    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options);

    Ok(pool)
}

/// Owns the Postgres pool and its lifecycle.
pub struct Database {
    pool: PgPool,
    migrations_dir: PathBuf,
    run_migrations: bool,
}

impl Database {
    pub fn new(cfg: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = create_pool(cfg).map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Self {
            pool,
            migrations_dir: PathBuf::from(&cfg.migrations_dir),
            run_migrations: cfg.run_migrations,
        })
    }

    /// Opens the first connection and applies migrations.
    ///
    /// Callers treat any error as fatal; there is no retry.
    pub async fn start(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        if self.run_migrations {
            let migrator = Migrator::new(Path::new(&self.migrations_dir))
                .await
                .map_err(|e| DomainError::DatabaseError(format!("Failed to load migrations: {}", e)))?;
            migrator
                .run(&self.pool)
                .await
                .map_err(|e| DomainError::DatabaseError(format!("Failed to run migrations: {}", e)))?;
            info!(dir = %self.migrations_dir.display(), "Migrations applied");
        }

        Ok(())
    }

    pub async fn stop(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    /// The query client.
    pub fn client(&self) -> &PgPool {
        &self.pool
    }

    /// Truncates every user table in the `public` schema in one statement.
    ///
    /// Test-teardown only. Failures are logged and swallowed so that cleanup
    /// never aborts a test run.
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let names: Vec<(String,)> =
            match sqlx::query_as("SELECT tablename FROM pg_tables WHERE schemaname = 'public'")
                .fetch_all(&self.pool)
                .await
            {
                Ok(rows) => rows,
                Err(e) => {
                    error!(error = %e, "Failed to list tables for reset");
                    return;
                }
            };

        let tables = user_tables(names.into_iter().map(|(name,)| name));
        let Some(statement) = truncate_statement(&tables) else {
            warn!("No user tables to truncate");
            return;
        };

        match sqlx::query(&statement).execute(&self.pool).await {
            Ok(_) => info!(tables = tables.len(), "Database reset"),
            Err(e) => error!(error = %e, "Failed to truncate tables"),
        }
    }
}

/// Outages (I/O, pool exhausted or closed) become `DatabaseUnavailable`;
/// everything else is a `DatabaseError`.
pub fn map_sqlx_error(op: &str, e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::DatabaseUnavailable(format!("Database {} failed: {}", op, e))
        }
        _ => DomainError::DatabaseError(format!("Database {} failed: {}", op, e)),
    }
}

/// Drops the migration bookkeeping table from a list of table names.
pub fn user_tables<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| name != MIGRATIONS_TABLE)
        .collect()
}

/// `TRUNCATE TABLE "public"."a", "public"."b" CASCADE;`, or `None` when
/// there is nothing to truncate.
pub fn truncate_statement(tables: &[String]) -> Option<String> {
    if tables.is_empty() {
        return None;
    }

    let list = tables
        .iter()
        .map(|name| format!("\"public\".\"{}\"", name.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!("TRUNCATE TABLE {} CASCADE;", list))
}
