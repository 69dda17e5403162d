use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single log entry produced by the logging front-end.
///
/// Consumed read-only by the router and by the file outputs it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    pub severity: Severity,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl LogMessage {
    /// Create a message stamped with the current time.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
