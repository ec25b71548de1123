//! Build tasks for tasksmith
//!
//! This crate defines the contract every task implements, a JSON property
//! update task, and tasks that assemble command lines for external tools.

pub mod command_executor;
pub mod dotnet;
pub mod json;
pub mod process;
pub mod task;

pub use command_executor::*;
pub use dotnet::{DotnetCommand, DotnetTestTask, ExecuteDotnetTask};
pub use json::{PropertyPath, UpdateJsonFileTask, UpdateRequest};
pub use process::ExternalProcessTask;
pub use task::{execute_to_code, Configure, Task, TaskSettings};
