use super::LogAdapter;
use super::config::{RouterConfig, derive_filename};
use super::formatter::{FormatterFn, default_format};
use crate::domain::{LogMessage, RouterError, Severity};
use crate::output::{FileOutput, OutputFactory};
use std::sync::Arc;
use tracing::{debug, warn};

/// Slot index of the mandatory full output; indices `0..Severity::COUNT`
/// hold the optional per-severity outputs.
const FULL_SLOT: usize = Severity::COUNT;
const SLOT_COUNT: usize = Severity::COUNT + 1;

/// Routes every message to one full log file and, for severities named in
/// the `separate` configuration, to a dedicated per-severity file whose name
/// is derived from the full file's (`app.log` → `app.error.log`).
///
/// Slots are written only during `initialize`; dispatch and flush take
/// `&self` and delegate, so a router shared behind an `Arc` after the setup
/// phase tolerates concurrent callers. Write serialization within one file
/// is the output's own responsibility.
pub struct MultiFileRouter {
    slots: [Option<Box<dyn FileOutput>>; SLOT_COUNT],
    factory: Arc<dyn OutputFactory>,
    formatter: Option<FormatterFn>,
}

impl MultiFileRouter {
    /// Create an uninitialized router over the given output constructor.
    pub fn new(factory: Arc<dyn OutputFactory>) -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            factory,
            formatter: None,
        }
    }

    /// Render a message with the recorded formatter override, or the raw
    /// message text when none was supplied.
    pub fn format(&self, msg: &LogMessage) -> String {
        match &self.formatter {
            Some(formatter) => formatter(msg),
            None => default_format(msg),
        }
    }

    /// Severities that currently have a dedicated output.
    pub fn dedicated_severities(&self) -> Vec<Severity> {
        Severity::ALL
            .into_iter()
            .filter(|s| self.slots[s.rank()].is_some())
            .collect()
    }

    /// Whether `initialize` has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.slots[FULL_SLOT].is_some()
    }
}

impl LogAdapter for MultiFileRouter {
    fn initialize(
        &mut self,
        config: &str,
        formatter: Option<FormatterFn>,
    ) -> Result<(), RouterError> {
        let config = RouterConfig::parse(config)?;
        self.formatter = formatter;

        // The full output gets the configuration blob verbatim. Failure
        // here aborts initialization outright: no partial state is usable.
        let mut full = self.factory.create();
        full.initialize(&config.full_config())
            .map_err(|e| RouterError::InitFailed("<full>".to_string(), e))?;
        let base = full.base_name().to_string();
        let suffix = full.suffix().to_string();
        self.slots[FULL_SLOT] = Some(full);

        for severity in Severity::ALL {
            if !config.wants_dedicated(severity) {
                continue;
            }
            let dedicated_config = config.dedicated_config(&base, &suffix, severity);
            let filename = derive_filename(&base, &suffix, severity);
            let mut output = self.factory.create();
            output
                .initialize(&dedicated_config)
                .map_err(|e| RouterError::InitFailed(filename.clone(), e))?;
            debug!(severity = %severity, filename = %filename, "Created dedicated output");
            self.slots[severity.rank()] = Some(output);
        }

        // Operator-declared names that match no canonical severity create
        // nothing; surface them in diagnostics only.
        for name in config.separate() {
            if Severity::from_name(name).is_none() {
                warn!(name = %name, "Ignoring unknown severity in 'separate'");
            }
        }

        Ok(())
    }

    fn dispatch(&self, msg: &LogMessage) -> Result<(), RouterError> {
        let Some(full) = &self.slots[FULL_SLOT] else {
            warn!("Dispatch on uninitialized router, dropping message");
            return Ok(());
        };

        // Both writes are attempted regardless of the other's outcome;
        // failures are swallowed so logging never fails the host.
        if let Err(e) = full.write(msg) {
            warn!(error = %e, "Full output rejected message");
        }
        if let Some(dedicated) = &self.slots[msg.severity.rank()] {
            if let Err(e) = dedicated.write(msg) {
                warn!(severity = %msg.severity, error = %e, "Dedicated output rejected message");
            }
        }
        Ok(())
    }

    fn flush(&self) {
        for slot in self.slots.iter().flatten() {
            slot.flush();
        }
    }

    fn shutdown(&mut self) {
        for slot in &mut self.slots {
            if let Some(output) = slot.take() {
                output.shutdown();
            }
        }
    }
}
