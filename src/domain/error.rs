use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for ovrboot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No ancestor within the search bound contains the marker directory.
    #[error("No SDK root found within {max_depth} parent directories of {}", .start.display())]
    RootNotFound { start: PathBuf, max_depth: usize },

    /// Search depth outside the accepted range.
    #[error("Invalid search depth {0}: must be at least 1")]
    InvalidSearchDepth(usize),

    /// Search path entry that the platform path-list syntax cannot carry.
    #[error("Search path entry cannot be exported: {}", .entry.display())]
    UnrepresentableSearchPath { entry: PathBuf },

    /// Driver name has no registered factory.
    #[error("Build driver '{name}' not found. Available: {available}")]
    UnknownDriver { name: String, available: String },

    /// `build()` was called before `initialize()`.
    #[error("Build driver '{0}' was not initialized")]
    DriverNotInitialized(String),

    /// Driver process could not be started.
    #[error("Failed to launch build driver '{driver}': {details}")]
    DriverLaunch { driver: String, details: String },

    /// Driver ran and reported failure.
    #[error("Build driver '{driver}' failed{}", exit_suffix(.code))]
    DriverFailed { driver: String, code: Option<i32> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit status for this error.
    ///
    /// Driver failures keep the driver's own status; everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::DriverFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_)
            | AppError::InvalidSearchDepth(_)
            | AppError::UnrepresentableSearchPath { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::RootNotFound { .. }
            | AppError::UnknownDriver { .. } => io::ErrorKind::NotFound,
            AppError::DriverNotInitialized(_)
            | AppError::DriverLaunch { .. }
            | AppError::DriverFailed { .. } => io::ErrorKind::Other,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {}", c)).unwrap_or_default()
}
