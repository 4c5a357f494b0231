pub mod greeting;
pub mod health;

pub use greeting::get_greeting;
pub use health::health_check;
