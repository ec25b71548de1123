use std::path::{Path, PathBuf};
use std::process::Output;
use tasksmith_core::{CommandArguments, Error, Result};

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Trait for executing external commands
/// This abstraction allows for testing without spawning processes by
/// providing different implementations for production and test environments
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with the given arguments in `working_dir`
    /// Returns the captured output of the command
    fn execute(&self, cmd: &str, args: &CommandArguments, working_dir: &Path) -> Result<Output>;
}

/// Production implementation that executes real commands
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Locate `cmd` on `PATH` (or check it directly if it is a path)
    fn locate(cmd: &str, args: &CommandArguments) -> Result<PathBuf> {
        which::which(cmd).map_err(|e| {
            Error::command_execution(
                cmd,
                args.as_slice().to_vec(),
                format!("executable not found: {e}"),
                None,
            )
        })
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, cmd: &str, args: &CommandArguments, working_dir: &Path) -> Result<Output> {
        let program = Self::locate(cmd, args)?;
        tracing::debug!(program = %program.display(), args = %args, "spawning process");

        std::process::Command::new(&program)
            .args(args.as_slice())
            .current_dir(working_dir)
            .output()
            .map_err(|e| {
                Error::command_execution(
                    cmd,
                    args.as_slice().to_vec(),
                    format!("failed to execute command: {e}"),
                    None,
                )
            })
    }
}

/// Test implementation that records invocations instead of spawning
/// This provides deterministic behavior for testing
#[cfg(test)]
#[derive(Clone, Default)]
pub struct TestCommandExecutor {
    responses: Arc<Mutex<HashMap<String, TestResponse>>>,
    invocations: Arc<Mutex<Vec<TestInvocation>>>,
}

#[cfg(test)]
#[derive(Clone)]
pub struct TestResponse {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub status_code: i32,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInvocation {
    pub cmd: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

#[cfg(test)]
impl TestCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, cmd: &str, args: &[&str], response: TestResponse) {
        let key = format!("{} {}", cmd, args.join(" "));
        self.responses.lock().unwrap().insert(key, response);
    }

    pub fn add_simple_response(&self, cmd: &str, args: &[&str], stdout: &str) {
        self.add_response(
            cmd,
            args,
            TestResponse {
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
                status_code: 0,
            },
        );
    }

    pub fn add_error_response(&self, cmd: &str, args: &[&str], stderr: &str, status_code: i32) {
        self.add_response(
            cmd,
            args,
            TestResponse {
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
                status_code,
            },
        );
    }

    pub fn invocations(&self) -> Vec<TestInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl CommandExecutor for TestCommandExecutor {
    fn execute(&self, cmd: &str, args: &CommandArguments, working_dir: &Path) -> Result<Output> {
        self.invocations.lock().unwrap().push(TestInvocation {
            cmd: cmd.to_string(),
            args: args.as_slice().to_vec(),
            working_dir: working_dir.to_path_buf(),
        });

        let key = format!("{} {}", cmd, args.as_slice().join(" "));
        let responses = self.responses.lock().unwrap();
        match responses.get(&key) {
            Some(response) => Ok(Output {
                status: exit_status::from_code(response.status_code),
                stdout: response.stdout.clone(),
                stderr: response.stderr.clone(),
            }),
            None => Err(Error::configuration(format!(
                "no test response configured for command: {key}"
            ))),
        }
    }
}

// Platform-specific module for creating ExitStatus
#[cfg(test)]
mod exit_status {
    #[cfg(unix)]
    pub fn from_code(code: i32) -> std::process::ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status stores the exit code in the second byte
        std::process::ExitStatus::from_raw(code << 8)
    }

    #[cfg(windows)]
    pub fn from_code(code: i32) -> std::process::ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_executor_simple_response() {
        let executor = TestCommandExecutor::new();
        executor.add_simple_response("echo", &["hello"], "hello\n");

        let args = CommandArguments::from_vec(vec!["hello".to_string()]);
        let output = executor.execute("echo", &args, Path::new("/work")).unwrap();

        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello\n");
        assert!(output.status.success());
        assert_eq!(
            executor.invocations(),
            vec![TestInvocation {
                cmd: "echo".into(),
                args: vec!["hello".into()],
                working_dir: PathBuf::from("/work"),
            }]
        );
    }

    #[test]
    fn test_test_executor_error_response_keeps_exit_code() {
        let executor = TestCommandExecutor::new();
        executor.add_error_response("false", &[], "command failed", 3);

        let output = executor
            .execute("false", &CommandArguments::new(), Path::new("."))
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&output.stderr), "command failed");
        assert_eq!(output.status.code(), Some(3));
    }

    #[test]
    fn test_test_executor_missing_response() {
        let executor = TestCommandExecutor::new();

        let args = CommandArguments::from_vec(vec!["cmd".to_string()]);
        let err = executor.execute("unknown", &args, Path::new(".")).unwrap_err();

        assert!(err.to_string().contains("no test response configured"));
    }

    #[test]
    fn test_system_executor_reports_missing_executable() {
        let executor = SystemCommandExecutor::new();

        let err = executor
            .execute(
                "tasksmith-definitely-not-installed",
                &CommandArguments::new(),
                Path::new("."),
            )
            .unwrap_err();

        assert_eq!(err.code(), 7);
        assert!(err.to_string().contains("executable not found"));
    }
}
