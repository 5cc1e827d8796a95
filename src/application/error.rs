//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add filesystem-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{} already exists: {}", existing_kind(.is_dir), .path.display())]
    AlreadyExists { path: PathBuf, is_dir: bool },

    #[error("cannot create {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

fn existing_kind(is_dir: &bool) -> &'static str {
    if *is_dir {
        "directory"
    } else {
        "path (not a directory)"
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
