//! # Stemcell Core Errors
//!
//! Defines the crate-wide error type.
//!
//! [`Error`] aggregates the typed errors of each subsystem (definition
//! parsing, stage pipelines, definition files) so callers can propagate any
//! of them with `?` and still match on the specific cause.
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::definition::error::DefinitionError;
use crate::stage_manager::error::StageSystemError;
use crate::storage::error::StorageSystemError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// A definition axis could not be resolved
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// Specific, typed stage system error
    #[error("Stage system error: {0}")]
    StageSystem(#[from] StageSystemError),

    /// Specific, typed storage system error
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// A definition was requested but one of its axes was never supplied
    #[error("Incomplete definition: no {axis} was given")]
    IncompleteDefinition { axis: &'static str },
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

// Helper to create an I/O error with context
impl Error {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::Io {
            source,
            operation: operation.into(),
            path,
        })
    }
}
