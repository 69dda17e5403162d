#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. RouterError in router module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod domain;
pub mod output;
pub mod registry;
pub mod router;

// Re-export main types for easy access
pub use domain::{LogMessage, RouterError, Severity};
pub use output::{FileOutput, OutputError, OutputFactory};
pub use registry::{ADAPTER_MULTIFILE, AdapterRegistry};
pub use router::{FormatterFn, LogAdapter, MultiFileRouter};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
