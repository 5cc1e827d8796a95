//! Layout generator service
//!
//! Resolves the project root, guards against existing paths, and either renders
//! the injected layout as text or creates it on disk.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{render_preview, LayoutSpec, NodeKind, ProjectTarget};
use crate::infrastructure::traits::FileSystem;

/// Service that turns a `LayoutSpec` into a preview or a directory tree.
pub struct LayoutGenerator {
    fs: Arc<dyn FileSystem>,
    spec: LayoutSpec,
}

impl LayoutGenerator {
    /// Create a new generator for `spec`.
    ///
    /// # Arguments
    /// * `fs` - Filesystem abstraction
    /// * `spec` - Layout to preview or materialize
    pub fn new(fs: Arc<dyn FileSystem>, spec: LayoutSpec) -> Self {
        Self { fs, spec }
    }

    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    /// Build the project root from name and optional base path.
    ///
    /// `base` defaults to the current working directory; a relative `base` is
    /// anchored there as well.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_target(
        &self,
        project_name: &str,
        base: Option<&Path>,
    ) -> ApplicationResult<ProjectTarget> {
        let cwd = self.fs.current_dir().with_path(Path::new("."))?;
        let base = base.unwrap_or(cwd.as_path());
        let target = ProjectTarget::resolve(project_name, base, &cwd)?;
        debug!("resolved target root: {}", target.root.display());
        Ok(target)
    }

    /// Fail with `AlreadyExists` if anything is present at the project root.
    #[instrument(level = "debug", skip(self))]
    pub fn check_collision(&self, target: &ProjectTarget) -> ApplicationResult<()> {
        let root = &target.root;
        if self.fs.exists(root) || self.fs.is_symlink(root) {
            return Err(ApplicationError::AlreadyExists {
                path: root.clone(),
                is_dir: self.fs.is_dir(root),
            });
        }
        Ok(())
    }

    /// Text rendering of the layout below `target`. No filesystem access.
    pub fn render_preview(&self, target: &ProjectTarget) -> String {
        render_preview(target, &self.spec)
    }

    /// Absolute paths `materialize` creates, root first, in creation order.
    pub fn planned_paths(&self, target: &ProjectTarget) -> Vec<PathBuf> {
        std::iter::once(target.root.clone())
            .chain(
                self.spec
                    .nodes()
                    .iter()
                    .map(|node| target.join(node.relative_path())),
            )
            .collect()
    }

    /// Create the layout on disk.
    ///
    /// The root is created exclusively, so a concurrent run that got there first
    /// yields `AlreadyExists`. Entries are created in declared order; the first
    /// failure aborts with `IoFailure` and whatever was already created stays.
    #[instrument(level = "debug", skip(self))]
    pub fn materialize(&self, target: &ProjectTarget) -> ApplicationResult<()> {
        let root = &target.root;

        if let Some(parent) = root.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent).with_path(parent)?;
            }
        }

        self.fs.create_dir(root).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ApplicationError::AlreadyExists {
                path: root.clone(),
                is_dir: self.fs.is_dir(root),
            },
            _ => ApplicationError::IoFailure {
                path: root.clone(),
                source: e,
            },
        })?;

        for node in self.spec.nodes() {
            let path = target.join(node.relative_path());
            match node.kind {
                NodeKind::Directory => self.fs.create_dir_all(&path).with_path(&path)?,
                NodeKind::File => self.fs.create_empty_file(&path).with_path(&path)?,
            }
            debug!("created {:?} {}", node.kind, path.display());
        }

        info!(
            "materialized {} entries below {}",
            self.spec.len(),
            root.display()
        );
        Ok(())
    }
}
