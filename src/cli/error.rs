//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::{ConfigError, GraphError, LinesError, SortError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Graph(#[from] GraphError),

    #[error("{0}")]
    Sort(#[from] SortError),

    #[error("{0}")]
    Lines(#[from] LinesError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Graph(_) | CliError::Sort(_) => crate::exitcode::DATAERR,
            CliError::Lines(LinesError::FileNotFound(_)) => crate::exitcode::NOINPUT,
            CliError::Lines(LinesError::Io { .. }) | CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
