pub mod config;
pub mod formatter;
pub mod multifile;

pub use formatter::{FormatterFn, default_format};
pub use multifile::MultiFileRouter;

use crate::domain::{LogMessage, RouterError};

/// Contract a generic logging front-end drives an adapter through.
///
/// Lifecycle is linear: `initialize` exactly once before anything else, any
/// number of `dispatch`/`flush` calls, `shutdown` exactly once at teardown.
pub trait LogAdapter: Send + Sync {
    /// Configure the adapter from a JSON configuration blob, optionally
    /// recording a formatter override for components that render messages.
    fn initialize(
        &mut self,
        config: &str,
        formatter: Option<FormatterFn>,
    ) -> Result<(), RouterError>;

    /// Route one message to the adapter's destinations. Individual
    /// destination failures are reported through tracing, not the caller:
    /// logging must never crash its host.
    fn dispatch(&self, msg: &LogMessage) -> Result<(), RouterError>;

    /// Flush every destination, best-effort.
    fn flush(&self);

    /// Tear down every destination, best-effort.
    fn shutdown(&mut self);
}
