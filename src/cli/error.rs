//! CLI-level errors (top-level, shown to the user)

use thiserror::Error;

use crate::application::ApplicationError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: unknown node reference '{name}'")]
    UnknownRef { line: usize, name: String },

    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => crate::exitcode::NOINPUT,
            CliError::Parse { .. } | CliError::UnknownRef { .. } => crate::exitcode::DATAERR,
            CliError::Application(_) => crate::exitcode::SOFTWARE,
        }
    }
}
