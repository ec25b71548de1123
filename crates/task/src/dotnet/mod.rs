//! Tasks wrapping the `dotnet` command-line interface


pub use test::DotnetTestTask;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tasksmith_core::{CommandArguments, Result, TaskContext};

use crate::command_executor::CommandExecutor;
use crate::process::ExternalProcessTask;
use crate::task::{Configure, Task, TaskSettings};

/// Default executable, looked up on `PATH` at run time
pub const DOTNET_EXECUTABLE: &str = "dotnet";

/// Sub-commands of the `dotnet` CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotnetCommand {
    Build,
    Clean,
    Pack,
    Publish,
    Restore,
    Test,
}

impl DotnetCommand {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DotnetCommand::Build => "build",
            DotnetCommand::Clean => "clean",
            DotnetCommand::Pack => "pack",
            DotnetCommand::Publish => "publish",
            DotnetCommand::Restore => "restore",
            DotnetCommand::Test => "test",
        }
    }
}

impl fmt::Display for DotnetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs `dotnet <command>` followed by the configured arguments
#[derive(Debug, Clone)]
pub struct ExecuteDotnetTask {
    command: DotnetCommand,
    process: ExternalProcessTask,
}

impl ExecuteDotnetTask {
    #[must_use]
    pub fn new(command: DotnetCommand) -> Self {
        let process = ExternalProcessTask::new(DOTNET_EXECUTABLE)
            .named(format!("dotnet {command}"))
            .with_arguments([command.as_str()]);
        Self { command, process }
    }

    #[must_use]
    pub fn command(&self) -> DotnetCommand {
        self.command
    }

    /// Use a specific `dotnet` executable instead of the one on `PATH`
    #[must_use]
    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.process = self.process.executable(executable);
        self
    }

    /// Append raw arguments
    #[must_use]
    pub fn with_arguments<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.process = self.process.with_arguments(args);
        self
    }

    #[must_use]
    pub fn working_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.process = self.process.working_folder(folder);
        self
    }

    #[must_use]
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.process = self.process.with_executor(executor);
        self
    }

    /// Full argument list, starting with the sub-command
    #[must_use]
    pub fn arguments(&self) -> &CommandArguments {
        self.process.arguments()
    }
}

impl Task for ExecuteDotnetTask {
    fn name(&self) -> &str {
        self.process.name()
    }

    fn settings(&self) -> &TaskSettings {
        self.process.settings()
    }

    fn run(&self, ctx: &mut TaskContext) -> Result<i32> {
        self.process.run(ctx)
    }
}

impl Configure for ExecuteDotnetTask {
    fn settings_mut(&mut self) -> &mut TaskSettings {
        self.process.settings_mut()
    }
}
