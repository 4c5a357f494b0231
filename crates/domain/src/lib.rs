//! Keystone Domain Layer
pub mod config;
pub mod errors;
pub mod user;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use user::User;
