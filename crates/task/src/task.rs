//! The contract shared by every task.
//!
//! An orchestrator builds a task through its fluent methods, then calls
//! [`Task::execute`] once per build step. The outcome has two shapes that
//! callers must tell apart:
//!
//! - `Err(error)`: a raised failure. `error.code()` is the status to report.
//! - `Ok(code)`: the task finished. `code` is `0` on success, or a non-zero
//!   code for a problem the task was configured to tolerate.
//!
//! [`execute_to_code`] flattens both shapes into a single integer for
//! callers that only need the status.

use tasksmith_core::{error_codes, Result, TaskContext};

/// Settings every task carries regardless of its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSettings {
    /// Human-readable purpose, logged when the task starts
    pub description: Option<String>,
    /// When false, a raised failure is logged and returned as `Ok(code)`
    pub fail_on_error: bool,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            description: None,
            fail_on_error: true,
        }
    }
}

/// A discrete unit of build work
pub trait Task {
    /// Name used in logs and tracing spans
    fn name(&self) -> &str;

    fn settings(&self) -> &TaskSettings;

    /// Perform the task's own work.
    ///
    /// Implementations return `Ok(0)` on success, `Ok(code)` for a tolerated
    /// problem and `Err` for anything that must stop the build.
    fn run(&self, ctx: &mut TaskContext) -> Result<i32>;

    /// Run the task inside a tracing span, applying the base settings.
    ///
    /// # Errors
    ///
    /// Returns the failure raised by [`Task::run`] unless the task was
    /// configured with `do_not_fail_on_error`.
    fn execute(&self, ctx: &mut TaskContext) -> Result<i32> {
        let span = tracing::info_span!("task", task = %self.name());
        let _guard = span.enter();

        let settings = self.settings();
        match &settings.description {
            Some(description) => ctx.info(format!("Executing task {}: {description}", self.name())),
            None => ctx.debug(format!("Executing task {}", self.name())),
        }

        match self.run(ctx) {
            Ok(error_codes::SUCCESS) => {
                ctx.debug(format!("Task {} completed successfully", self.name()));
                Ok(error_codes::SUCCESS)
            }
            Ok(code) => {
                ctx.warn(format!("Task {} completed with code {code}", self.name()));
                Ok(code)
            }
            Err(error) if !settings.fail_on_error => {
                ctx.warn(format!(
                    "Task {} failed but is set not to fail the build: {error}",
                    self.name()
                ));
                Ok(error.code())
            }
            Err(error) => Err(error),
        }
    }
}

/// Fluent mutators shared by every task
pub trait Configure: Task + Sized {
    fn settings_mut(&mut self) -> &mut TaskSettings;

    /// Set the description logged when the task starts
    #[must_use]
    fn description(mut self, description: impl Into<String>) -> Self {
        self.settings_mut().description = Some(description.into());
        self
    }

    /// Report raised failures as returned codes instead of failing the build
    #[must_use]
    fn do_not_fail_on_error(mut self) -> Self {
        self.settings_mut().fail_on_error = false;
        self
    }
}

/// Execute a task and collapse the outcome into a status code.
///
/// Raised failures are logged at error level before their code is returned.
pub fn execute_to_code(task: &dyn Task, ctx: &mut TaskContext) -> i32 {
    match task.execute(ctx) {
        Ok(code) => code,
        Err(error) => {
            ctx.error(error.to_string());
            error.code()
        }
    }
}
