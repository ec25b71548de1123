//! Shared utilities for tasksmith
//!
//! File helpers used by tasks that persist their results, and the tracing
//! setup used by the command-line entry point.

pub mod atomic_file;
pub mod logging;

pub use atomic_file::*;
pub use logging::*;
