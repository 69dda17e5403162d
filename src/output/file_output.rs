use crate::domain::{LogMessage, Severity};
use thiserror::Error;

/// Errors surfaced by a file output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid output configuration: {0}")]
    InvalidConfig(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// A single log-file destination.
///
/// `initialize` receives a JSON object carrying at least `filename`, an
/// optional numeric `level` (absence means accept all severities), and
/// opaque rotation parameters (`maxLines`, `maxsize`, `daily`, `maxDays`,
/// `rotate`, `perm`, ...) which implementations interpret as they see fit;
/// the router forwards them unexamined.
///
/// Implementations must tolerate concurrent `write` calls: the router does
/// not serialize dispatches targeting the same output.
pub trait FileOutput: Send + Sync {
    fn initialize(&mut self, config: &serde_json::Value) -> Result<(), OutputError>;

    fn write(&self, msg: &LogMessage) -> Result<(), OutputError>;

    fn flush(&self);

    fn shutdown(&self);

    /// Configured file name without its suffix, e.g. `logs/app` for
    /// `logs/app.log`. Valid only after a successful `initialize`.
    fn base_name(&self) -> &str;

    /// Configured file-name suffix including the dot, e.g. `.log`, or the
    /// empty string when the name has none.
    fn suffix(&self) -> &str;

    /// Severity this output is restricted to, `None` when it accepts all.
    fn level(&self) -> Option<Severity>;
}

/// Constructor for fresh, uninitialized outputs.
///
/// Injected explicitly into the router instead of being resolved through a
/// process-global writer constructor, so hosts and tests choose the backing
/// implementation.
pub trait OutputFactory: Send + Sync {
    fn create(&self) -> Box<dyn FileOutput>;
}

impl<F> OutputFactory for F
where
    F: Fn() -> Box<dyn FileOutput> + Send + Sync,
{
    fn create(&self) -> Box<dyn FileOutput> {
        self()
    }
}
