//! Project target resolution

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Resolved project root for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// Name as given on the command line
    pub name: String,
    /// `base_path/name`, absolute
    pub root: PathBuf,
}

impl ProjectTarget {
    /// Join `base` and `name` into a project root.
    ///
    /// A relative `base` is anchored at `cwd`. Only empty names are rejected;
    /// anything else is left for the filesystem to accept or refuse.
    pub fn resolve(name: &str, base: &Path, cwd: &Path) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "project name must not be empty".to_string(),
            ));
        }

        let base = if base.is_absolute() {
            base.to_path_buf()
        } else {
            cwd.join(base)
        };

        Ok(Self {
            name: name.to_string(),
            root: base.join(name),
        })
    }

    /// Absolute path of a layout entry below the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_absolute_base_when_resolve_then_joins_name() {
        let target = ProjectTarget::resolve("demo", Path::new("/tmp"), Path::new("/ignored"))
            .expect("resolve");
        assert_eq!(target.root, PathBuf::from("/tmp/demo"));
        assert_eq!(target.name, "demo");
    }

    #[test]
    fn given_relative_base_when_resolve_then_anchored_at_cwd() {
        let target =
            ProjectTarget::resolve("demo", Path::new("work"), Path::new("/home/u")).expect("resolve");
        assert_eq!(target.root, PathBuf::from("/home/u/work/demo"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn given_blank_name_when_resolve_then_invalid_argument(#[case] name: &str) {
        let result = ProjectTarget::resolve(name, Path::new("/tmp"), Path::new("/tmp"));
        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    }
}
