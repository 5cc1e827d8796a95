//! Domain layer: layout model, target resolution, and preview rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod layout;
pub mod preview;
pub mod target;

pub use error::DomainError;
pub use layout::{LayoutSpec, NodeKind, TreeNode};
pub use preview::render_preview;
pub use target::ProjectTarget;

/// Expand `~`, `$VAR`, and `${VAR}` in a path-like string.
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
