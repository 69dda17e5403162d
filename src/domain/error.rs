use crate::output::OutputError;
use thiserror::Error;

/// Top-level error type for the router.
///
/// Initialization errors are fatal: the caller must not use the router after
/// `initialize` fails. Per-message write failures are non-fatal and reported
/// through tracing rather than this type.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to initialize output '{0}': {1}")]
    InitFailed(String, #[source] OutputError),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}
