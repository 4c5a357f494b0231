pub mod cache_store;
pub mod user_repository;

pub use cache_store::CacheStore;
pub use user_repository::UserRepository;
