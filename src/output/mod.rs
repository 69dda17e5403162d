//! The file-output capability consumed by the router.
//!
//! The actual single-file writer (buffering, rotation, permissions, disk I/O)
//! lives outside this crate; the router only depends on the contract below.

pub mod file_output;

pub use file_output::{FileOutput, OutputError, OutputFactory};
