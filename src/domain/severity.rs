use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log message, ranked from most to least severe.
///
/// The discriminant doubles as the stable numeric rank (lower rank = more
/// severe) and as the slot index inside the router's output array, so the
/// variant order here is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    /// Number of severity levels.
    pub const COUNT: usize = 8;

    /// All severities in rank order, most severe first.
    pub const ALL: [Severity; Severity::COUNT] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Stable numeric rank, 0 (`emergency`) through 7 (`debug`).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Severity for a numeric rank, if in range.
    pub fn from_rank(rank: usize) -> Option<Severity> {
        Severity::ALL.get(rank).copied()
    }

    /// Canonical lowercase name, as used in configuration and derived filenames.
    pub fn name(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    /// Case-sensitive lookup against the canonical names.
    pub fn from_name(name: &str) -> Option<Severity> {
        Severity::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
