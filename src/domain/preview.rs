//! Text rendering of a layout (dry-run output)

use termtree::Tree;
use tracing::instrument;

use crate::domain::{LayoutSpec, ProjectTarget, TreeNode};

/// Column at which descriptions start, counted from the start of the line.
const COMMENT_COLUMN: usize = 33;

/// Width of one level of branch glyphs (`├── `, `│   `).
const INDENT: usize = 4;

/// Render `spec` below `target` as a box-drawing tree.
///
/// Depth-first in declared order, directories suffixed with `/`. Pure: no
/// filesystem access, identical input gives identical output.
#[instrument(level = "debug", skip(spec), fields(nodes = spec.len()))]
pub fn render_preview(target: &ProjectTarget, spec: &LayoutSpec) -> String {
    Tree::new(format!("{}/", target.name))
        .with_leaves(build_leaves(spec, &[]))
        .to_string()
}

fn build_leaves(spec: &LayoutSpec, parent: &[String]) -> Vec<Tree<String>> {
    spec.children_of(parent)
        .map(|node| {
            let children = if node.is_dir() {
                build_leaves(spec, &node.segments)
            } else {
                Vec::new()
            };
            Tree::new(label(node)).with_leaves(children)
        })
        .collect()
}

fn label(node: &TreeNode) -> String {
    let name = if node.is_dir() {
        format!("{}/", node.name())
    } else {
        node.name().to_string()
    };

    match &node.description {
        Some(description) => {
            let width = COMMENT_COLUMN
                .saturating_sub(INDENT * node.depth())
                .max(name.chars().count() + 1);
            format!("{:<width$}# {}", name, description, width = width)
        }
        None => name,
    }
}
