pub mod greeting;

// Re-export use cases
pub use greeting::GetGreetingUseCase;
