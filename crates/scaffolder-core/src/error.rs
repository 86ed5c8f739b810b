//! Error taxonomy for the generation engine
//!
//! Every variant is terminal for an invocation: nothing inside the engine
//! retries or recovers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while normalizing answers or materializing a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Bad or missing required input; nothing has been written
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The target root already exists; nothing has been written
    #[error("project \"{}\" already exists", .0.display())]
    TargetExists(PathBuf),

    /// A directory create or file write failed; earlier writes are left in place
    #[error("failed to write {}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A preset file could not be read or parsed
    #[error("invalid preset file {}: {message}", path.display())]
    Preset { path: PathBuf, message: String },

    #[error("failed to serialize generated JSON")]
    Serialize(#[from] serde_json::Error),
}

impl ScaffoldError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
