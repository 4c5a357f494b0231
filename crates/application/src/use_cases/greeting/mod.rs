pub mod get_greeting;

pub use get_greeting::{GetGreetingUseCase, GREETING_KEY, GREETING_TTL, GREETING_VALUE};
