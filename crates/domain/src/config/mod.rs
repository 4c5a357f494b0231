//! Configuration module for Keystone
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading order and CLI overrides
//! - `server`: HTTP listener binding
//! - `database`: PostgreSQL connection settings
//! - `cache`: Cache store connection settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use cache::{CacheBackend, CacheConfig};
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
