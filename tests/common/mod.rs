#![allow(dead_code)] // each test binary uses its own subset of this harness

use fanlog::{FileOutput, LogMessage, OutputError, OutputFactory, Severity};
use parking_lot::Mutex;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Shared journal of everything the outputs created by a [`RecordingFactory`]
/// were asked to do, keyed by the filename each output was initialized with.
#[derive(Default)]
pub struct SinkLog {
    pub inits: Mutex<Vec<(String, Value)>>,
    pub writes: Mutex<Vec<(String, String)>>,
    pub flushes: Mutex<Vec<String>>,
    pub shutdowns: Mutex<Vec<String>>,
}

impl SinkLog {
    pub fn total_writes(&self) -> usize {
        self.writes.lock().len()
    }

    pub fn writes_to(&self, filename: &str) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .filter(|(name, _)| name == filename)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn initialized_filenames(&self) -> Vec<String> {
        self.inits.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn init_config_for(&self, filename: &str) -> Option<Value> {
        self.inits
            .lock()
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, config)| config.clone())
    }
}

struct RecordingOutput {
    log: Arc<SinkLog>,
    fail_init_for: Vec<String>,
    fail_writes_for: Vec<String>,
    filename: String,
    base: String,
    suffix: String,
    level: Option<Severity>,
}

impl FileOutput for RecordingOutput {
    fn initialize(&mut self, config: &Value) -> Result<(), OutputError> {
        let filename = config
            .get("filename")
            .and_then(Value::as_str)
            .ok_or_else(|| OutputError::InvalidConfig("missing filename".to_string()))?
            .to_string();

        if self.fail_init_for.contains(&filename) {
            return Err(OutputError::InvalidConfig(format!(
                "forced init failure for {filename}"
            )));
        }

        // Same decomposition a real file writer reports: extension of the
        // last path component, dot included.
        let (base, suffix) = match Path::new(&filename).extension().and_then(|e| e.to_str()) {
            Some(ext) => (
                filename[..filename.len() - ext.len() - 1].to_string(),
                format!(".{ext}"),
            ),
            None => (filename.clone(), String::new()),
        };

        self.level = config
            .get("level")
            .and_then(Value::as_u64)
            .and_then(|rank| Severity::from_rank(rank as usize));

        self.log.inits.lock().push((filename.clone(), config.clone()));
        self.filename = filename;
        self.base = base;
        self.suffix = suffix;
        Ok(())
    }

    fn write(&self, msg: &LogMessage) -> Result<(), OutputError> {
        if self.fail_writes_for.contains(&self.filename) {
            return Err(OutputError::WriteFailed(format!(
                "forced write failure for {}",
                self.filename
            )));
        }
        self.log
            .writes
            .lock()
            .push((self.filename.clone(), msg.text.clone()));
        Ok(())
    }

    fn flush(&self) {
        self.log.flushes.lock().push(self.filename.clone());
    }

    fn shutdown(&self) {
        self.log.shutdowns.lock().push(self.filename.clone());
    }

    fn base_name(&self) -> &str {
        &self.base
    }

    fn suffix(&self) -> &str {
        &self.suffix
    }

    fn level(&self) -> Option<Severity> {
        self.level
    }
}

/// Factory producing recording outputs bound to one shared [`SinkLog`],
/// with optional per-filename failure injection.
pub struct RecordingFactory {
    log: Arc<SinkLog>,
    fail_init_for: Vec<String>,
    fail_writes_for: Vec<String>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self {
            log: Arc::new(SinkLog::default()),
            fail_init_for: Vec::new(),
            fail_writes_for: Vec::new(),
        }
    }

    /// Handle to the shared journal; grab it before handing the factory to
    /// a router.
    pub fn log(&self) -> Arc<SinkLog> {
        self.log.clone()
    }

    /// Make `initialize` fail for outputs configured with this filename.
    pub fn fail_init_for(mut self, filename: &str) -> Self {
        self.fail_init_for.push(filename.to_string());
        self
    }

    /// Make `write` fail for outputs configured with this filename.
    pub fn fail_writes_for(mut self, filename: &str) -> Self {
        self.fail_writes_for.push(filename.to_string());
        self
    }
}

impl OutputFactory for RecordingFactory {
    fn create(&self) -> Box<dyn FileOutput> {
        Box::new(RecordingOutput {
            log: self.log.clone(),
            fail_init_for: self.fail_init_for.clone(),
            fail_writes_for: self.fail_writes_for.clone(),
            filename: String::new(),
            base: String::new(),
            suffix: String::new(),
            level: None,
        })
    }
}
