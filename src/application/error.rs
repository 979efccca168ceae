//! Application-level errors.
//!
//! Invalid edit targets are not errors: the engine answers them with a
//! silent no-op by design. What remains is the persistence hook.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
