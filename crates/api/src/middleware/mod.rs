pub mod request_logger;
pub mod security_headers;

pub use request_logger::log_requests;
pub use security_headers::{security_headers, SECURITY_HEADERS};
