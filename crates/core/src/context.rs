//! Execution context passed into every task.
//!
//! The context is threaded explicitly through `execute` rather than living in
//! global state. It resolves relative paths against a working directory and
//! acts as the logging facility: every message is emitted as a `tracing`
//! event and also kept in memory so callers can inspect what a task reported.

use std::fmt;
use std::path::{Path, PathBuf};

/// Severity of a logged message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

/// A single message logged through the context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Ambient state available to a task while it executes
#[derive(Debug, Clone)]
pub struct TaskContext {
    working_dir: PathBuf,
    entries: Vec<LogEntry>,
}

impl TaskContext {
    /// Create a context rooted at the process's current directory
    #[must_use]
    pub fn new() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_working_dir(working_dir)
    }

    /// Create a context rooted at the given directory
    #[must_use]
    pub fn with_working_dir(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve a possibly relative path against the working directory
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message.into());
    }

    /// All messages logged so far, oldest first
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages logged at warning level
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.level == LogLevel::Warn)
            .map(|entry| entry.message.as_str())
    }

    /// Drop recorded messages, keeping the working directory
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn log(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Debug => tracing::debug!("{message}"),
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Warn => tracing::warn!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
        self.entries.push(LogEntry { level, message });
    }
}

impl Default for TaskContext {
    fn default() -> Self {
        Self::new()
    }
}
