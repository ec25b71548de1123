//! Tasks that run an external program.
//!
//! [`ExternalProcessTask`] is the argument builder that tool-specific tasks
//! wrap. Every fluent call appends tokens to the end of the argument list,
//! so the command line reflects the exact order of the calls.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tasksmith_core::{error_codes, CommandArguments, Error, Result, TaskContext};

use crate::command_executor::{CommandExecutor, SystemCommandExecutor};
use crate::task::{Configure, Task, TaskSettings};

/// Runs an executable with an ordered list of arguments
#[derive(Clone)]
pub struct ExternalProcessTask {
    name: String,
    executable: String,
    arguments: CommandArguments,
    working_folder: Option<PathBuf>,
    executor: Arc<dyn CommandExecutor>,
    settings: TaskSettings,
}

impl ExternalProcessTask {
    #[must_use]
    pub fn new(executable: impl Into<String>) -> Self {
        let executable = executable.into();
        Self {
            name: executable.clone(),
            executable,
            arguments: CommandArguments::new(),
            working_folder: None,
            executor: Arc::new(SystemCommandExecutor::new()),
            settings: TaskSettings::default(),
        }
    }

    /// Name shown in logs and spans
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the program to run
    #[must_use]
    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Append arguments after the ones already configured
    #[must_use]
    pub fn with_arguments<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(args);
        self
    }

    /// Directory to run in; relative paths resolve against the context
    #[must_use]
    pub fn working_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.working_folder = Some(folder.into());
        self
    }

    /// Use a different process launcher
    #[must_use]
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    #[must_use]
    pub fn arguments(&self) -> &CommandArguments {
        &self.arguments
    }

    #[must_use]
    pub fn executable_name(&self) -> &str {
        &self.executable
    }
}

impl fmt::Debug for ExternalProcessTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalProcessTask")
            .field("name", &self.name)
            .field("executable", &self.executable)
            .field("arguments", &self.arguments)
            .field("working_folder", &self.working_folder)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Task for ExternalProcessTask {
    fn name(&self) -> &str {
        &self.name
    }

    fn settings(&self) -> &TaskSettings {
        &self.settings
    }

    fn run(&self, ctx: &mut TaskContext) -> Result<i32> {
        let working_dir = match &self.working_folder {
            Some(folder) => ctx.resolve(folder),
            None => ctx.working_dir().to_path_buf(),
        };

        ctx.info(format!(
            "Running {} {} in {}",
            self.executable,
            self.arguments,
            working_dir.display()
        ));
        let output = self
            .executor
            .execute(&self.executable, &self.arguments, &working_dir)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            ctx.info(line);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            ctx.warn(line);
        }

        if output.status.success() {
            return Ok(error_codes::SUCCESS);
        }

        let message = match stderr.trim() {
            "" => "process exited with a failure status".to_string(),
            text => text.to_string(),
        };
        Err(Error::command_execution(
            self.executable.clone(),
            self.arguments.as_slice().to_vec(),
            message,
            output.status.code(),
        ))
    }
}

impl Configure for ExternalProcessTask {
    fn settings_mut(&mut self) -> &mut TaskSettings {
        &mut self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_executor::TestCommandExecutor;
    use std::path::Path;

    #[test]
    fn test_arguments_follow_call_order() {
        let task = ExternalProcessTask::new("git")
            .with_arguments(["commit"])
            .with_arguments(["-m", "release"])
            .with_arguments(["--no-verify"]);

        assert_eq!(
            task.arguments().as_slice(),
            &["commit", "-m", "release", "--no-verify"]
        );
    }

    #[test]
    fn test_runs_in_resolved_working_folder() {
        let executor = TestCommandExecutor::new();
        executor.add_simple_response("git", &["status"], "clean\n");
        let mut ctx = TaskContext::with_working_dir("/repo");

        let code = ExternalProcessTask::new("git")
            .with_arguments(["status"])
            .working_folder("sub")
            .with_executor(Arc::new(executor.clone()))
            .execute(&mut ctx)
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(executor.invocations()[0].working_dir, Path::new("/repo/sub"));
        assert!(ctx.entries().iter().any(|e| e.message == "clean"));
    }

    #[test]
    fn test_failed_process_raises_its_exit_code() {
        let executor = TestCommandExecutor::new();
        executor.add_error_response("make", &["all"], "no rule to make target\n", 2);
        let mut ctx = TaskContext::with_working_dir("/repo");

        let err = ExternalProcessTask::new("make")
            .with_arguments(["all"])
            .with_executor(Arc::new(executor))
            .execute(&mut ctx)
            .unwrap_err();

        assert_eq!(err.code(), 2);
        assert!(err.to_string().contains("no rule to make target"));
    }
}
