pub mod error;
pub mod log_message;
pub mod severity;

pub use error::RouterError;
pub use log_message::LogMessage;
pub use severity::Severity;
