pub mod cache;
pub mod config;
pub mod database;
pub mod logging;

pub use cache::{init_cache, shutdown_cache};
pub use config::{load_config, log_config_summary};
pub use database::{init_database, shutdown_database};
pub use logging::init_logging;
