//! Error conversion helpers for filesystem operations
//!
//! Provides an extension trait that attaches the offending path to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with path context.
pub trait IoResultExt<T> {
    /// Turn an I/O error into `ApplicationError::IoFailure` for `path`.
    ///
    /// # Example
    /// ```ignore
    /// fs.create_dir(&dir).with_path(&dir)?;
    /// ```
    fn with_path(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::IoFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn given_io_error_when_with_path_then_io_failure_carries_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "disk full"));

        let err = result.with_path(Path::new("/tmp/x")).unwrap_err();

        match err {
            ApplicationError::IoFailure { path, source } => {
                assert_eq!(path, PathBuf::from("/tmp/x"));
                assert_eq!(source.to_string(), "disk full");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
