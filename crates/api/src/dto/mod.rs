pub mod envelope;
pub mod error;

pub use envelope::{envelope, DataEnvelope};
pub use error::ErrorResponse;
