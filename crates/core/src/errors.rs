use std::path::PathBuf;

use crate::types::JsonKind;

/// Result type alias for tasksmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stable integer codes reported by tasks.
///
/// Orchestrators compare against these values directly, so they are part of
/// the public contract and must not be renumbered.
pub mod error_codes {
    /// The task completed without any detected problem.
    pub const SUCCESS: i32 = 0;
    /// The input file does not exist.
    pub const FILE_NOT_FOUND: i32 = 1;
    /// No update requests were configured.
    pub const NOTHING_TO_UPDATE: i32 = 2;
    /// A property path did not resolve in the document.
    pub const PROPERTY_NOT_FOUND: i32 = 3;
    /// A new value's type differs from the existing value's type.
    pub const TYPE_MISMATCH: i32 = 4;
    /// The input file is not a valid JSON document.
    pub const INVALID_DOCUMENT: i32 = 5;
    /// Reading or writing a file failed.
    pub const FILE_SYSTEM: i32 = 6;
    /// An external process could not be spawned.
    pub const COMMAND_EXECUTION: i32 = 7;
    /// The task was configured inconsistently.
    pub const CONFIGURATION: i32 = 8;
}

/// Failure signal raised by tasks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file of a task is missing
    #[error("JSON file {} not found!", .path.display())]
    FileNotFound { path: PathBuf },

    /// An update task was executed without any update requests
    #[error("Nothing to update in file {}!", .path.display())]
    NothingToUpdate { path: PathBuf },

    /// A property path did not resolve in the document
    #[error("Property {property} not found in {}", .path.display())]
    PropertyNotFound { property: String, path: PathBuf },

    /// A new value's type differs from the value it replaces
    #[error("Property {property} type mismatch. Expected {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: JsonKind,
        actual: JsonKind,
    },

    /// The input file could not be parsed
    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File system operations
    #[error("file system {operation} operation failed for '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Command execution errors
    #[error("{}", format_command_error(.command, .args, .message, .exit_code))]
    CommandExecution {
        command: String,
        args: Vec<String>,
        message: String,
        exit_code: Option<i32>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

fn format_command_error(
    command: &str,
    args: &[String],
    message: &str,
    exit_code: &Option<i32>,
) -> String {
    let args_str = args.join(" ");
    let invocation = if args_str.is_empty() {
        command.to_string()
    } else {
        format!("{command} {args_str}")
    };
    match exit_code {
        Some(code) => format!("command '{invocation}' failed with exit code {code}: {message}"),
        None => format!("command '{invocation}' failed: {message}"),
    }
}

impl Error {
    /// The stable integer code for this failure.
    ///
    /// Command failures surface a positive process exit code unchanged.
    /// Those codes share the numeric space with [`error_codes`], so a tool
    /// exiting with 1 or 3 reads the same as `FILE_NOT_FOUND` or
    /// `PROPERTY_NOT_FOUND`. Zero, negative or missing exit codes map to
    /// `COMMAND_EXECUTION`.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Error::FileNotFound { .. } => error_codes::FILE_NOT_FOUND,
            Error::NothingToUpdate { .. } => error_codes::NOTHING_TO_UPDATE,
            Error::PropertyNotFound { .. } => error_codes::PROPERTY_NOT_FOUND,
            Error::TypeMismatch { .. } => error_codes::TYPE_MISMATCH,
            Error::InvalidDocument { .. } => error_codes::INVALID_DOCUMENT,
            Error::FileSystem { .. } => error_codes::FILE_SYSTEM,
            Error::CommandExecution { exit_code, .. } => match exit_code {
                Some(code) if *code > 0 => *code,
                _ => error_codes::COMMAND_EXECUTION,
            },
            Error::Configuration { .. } => error_codes::CONFIGURATION,
        }
    }
}

// Conversion implementations
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::InvalidDocument {
            path: PathBuf::new(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a missing input file error
    #[must_use]
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create an empty update set error
    #[must_use]
    pub fn nothing_to_update(path: impl Into<PathBuf>) -> Self {
        Error::NothingToUpdate { path: path.into() }
    }

    /// Create an unresolved property error
    #[must_use]
    pub fn property_not_found(property: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::PropertyNotFound {
            property: property.into(),
            path: path.into(),
        }
    }

    /// Create a type mismatch error
    #[must_use]
    pub fn type_mismatch(property: impl Into<String>, expected: JsonKind, actual: JsonKind) -> Self {
        Error::TypeMismatch {
            property: property.into(),
            expected,
            actual,
        }
    }

    /// Create an invalid document error
    #[must_use]
    pub fn invalid_document(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::InvalidDocument {
            path: path.into(),
            source,
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a command execution error
    #[must_use]
    pub fn command_execution(
        command: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Error::CommandExecution {
            command: command.into(),
            args,
            message: message.into(),
            exit_code,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
