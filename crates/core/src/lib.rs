//! Core domain types, errors, and the execution context for `tasksmith`.
//!
//! Every task in the workspace reports failures through the [`Error`] enum
//! defined here. Each variant carries a stable integer code that
//! orchestrators rely on, so the codes never change once published.
//!
//! ## Key Components
//!
//! - **`errors`**: the failure signal, its numeric codes and the `Result` alias.
//! - **`context`**: the [`TaskContext`] threaded through every task execution,
//!   carrying the working directory and the logging facility.
//! - **`types`**: small newtypes such as [`CommandArguments`] and [`JsonKind`].

pub mod context;
pub mod errors;
pub mod types;

pub use self::{
    context::{LogEntry, LogLevel, TaskContext},
    errors::{error_codes, Error, Result},
    types::*,
};
