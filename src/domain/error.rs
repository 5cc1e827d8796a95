//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the layout and target rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("layout node has no path segments")]
    EmptyNode,

    #[error("layout node declared twice: {0}")]
    DuplicateNode(PathBuf),

    #[error("layout node {node} declared before its parent {parent}")]
    MissingParent { node: PathBuf, parent: PathBuf },

    #[error("layout node {node} is placed under file {parent}")]
    ParentNotDirectory { node: PathBuf, parent: PathBuf },
}
