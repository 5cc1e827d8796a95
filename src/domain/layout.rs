//! Declarative project layout
//!
//! A `LayoutSpec` is an ordered, prefix-closed list of `TreeNode`s: every node's
//! parent directory is declared before the node itself. Adding a directory or
//! placeholder to the layout is a change to `RESEARCH_LAYOUT`, never to the code
//! that walks it.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::DomainError;

/// Kind of a layout entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
}

/// One path entry of a layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Path segments from the project root, e.g. `["data", "raw", "imaging"]`
    pub segments: Vec<String>,
    pub kind: NodeKind,
    /// Shown next to the entry in the preview; never written to disk
    pub description: Option<String>,
}

impl TreeNode {
    /// Build a node from a `/`-separated relative path.
    pub fn new(path: &str, kind: NodeKind) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            kind,
            description: None,
        }
    }

    pub fn dir(path: &str) -> Self {
        Self::new(path, NodeKind::Directory)
    }

    pub fn file(path: &str) -> Self {
        Self::new(path, NodeKind::File)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Segments of the parent directory (empty for top-level entries).
    pub fn parent_segments(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, parent)) => parent,
            None => &[],
        }
    }

    /// Number of segments; top-level entries have depth 1.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

/// Ordered, immutable project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    nodes: Vec<TreeNode>,
}

impl LayoutSpec {
    /// Validate and wrap an ordered node list.
    ///
    /// Rejects empty nodes, duplicates, and nodes whose parent directory is not
    /// declared earlier in the list.
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self, DomainError> {
        let mut seen: HashMap<&[String], NodeKind> = HashMap::new();

        for node in &nodes {
            if node.segments.is_empty() {
                return Err(DomainError::EmptyNode);
            }
            let parent = node.parent_segments();
            if !parent.is_empty() {
                match seen.get(parent) {
                    Some(NodeKind::Directory) => {}
                    Some(NodeKind::File) => {
                        return Err(DomainError::ParentNotDirectory {
                            node: node.relative_path(),
                            parent: parent.iter().collect(),
                        })
                    }
                    None => {
                        return Err(DomainError::MissingParent {
                            node: node.relative_path(),
                            parent: parent.iter().collect(),
                        })
                    }
                }
            }
            if seen.insert(node.segments.as_slice(), node.kind).is_some() {
                return Err(DomainError::DuplicateNode(node.relative_path()));
            }
        }

        Ok(Self { nodes })
    }

    /// The canonical research project layout.
    pub fn research() -> Self {
        let nodes = RESEARCH_LAYOUT
            .iter()
            .map(|(path, kind, description)| {
                let node = TreeNode::new(path, *kind);
                match description {
                    Some(d) => node.with_description(*d),
                    None => node,
                }
            })
            .collect();
        Self { nodes }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of `parent` in declared order.
    pub fn children_of<'a>(&'a self, parent: &'a [String]) -> impl Iterator<Item = &'a TreeNode> {
        self.nodes
            .iter()
            .filter(move |n| n.parent_segments() == parent)
    }

    /// Placeholder files in declared order.
    pub fn files(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| !n.is_dir())
    }

    /// Directories in declared order.
    pub fn directories(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| n.is_dir())
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::research()
    }
}

use NodeKind::{Directory, File};

/// (relative path, kind, preview description)
#[rustfmt::skip]
const RESEARCH_LAYOUT: &[(&str, NodeKind, Option<&str>)] = &[
    ("README.md",                             File,      Some("Project-level README")),
    ("LICENSE",                               File,      Some("Empty placeholder license file")),
    ("metadata",                              Directory, None),
    ("metadata/project_metadata.txt",         File,      Some("Project-level information (title, PI, funding)")),
    ("metadata/sample_metadata.csv",          File,      Some("Sample information (IDs, species, conditions)")),
    ("metadata/experiment_metadata.xlsx",     File,      Some("Experimental details (protocols, reagents, dates)")),
    ("data",                                  Directory, None),
    ("data/raw",                              Directory, None),
    ("data/raw/sequencing",                   Directory, Some("Raw sequencing data")),
    ("data/raw/imaging",                      Directory, Some("Raw imaging data")),
    ("data/references",                       Directory, Some("Reference datasets or external resources")),
    ("data/processed",                        Directory, Some("Cleaned or feature-extracted data")),
    ("src",                                   Directory, None),
    ("src/preprocessing",                     Directory, Some("Scripts to prepare and clean raw data")),
    ("src/training",                          Directory, Some("Model training scripts")),
    ("src/evaluation",                        Directory, Some("Evaluation scripts")),
    ("src/analysis",                          Directory, Some("Analysis scripts")),
    ("src/visualization",                     Directory, Some("Visualization scripts")),
    ("src/utils",                             Directory, Some("Utility functions")),
    ("results",                               Directory, None),
    ("results/figures",                       Directory, Some("Plots and visualizations")),
    ("results/tables",                        Directory, Some("Metrics and summary tables")),
    ("results/reports",                       Directory, Some("Reports or summaries of analysis")),
    ("docs",                                  Directory, Some("Supporting documentation and protocols")),
    ("notebooks",                             Directory, Some("Jupyter or R notebooks")),
    ("configs",                               Directory, Some("Hyperparameters, training configs, experiment settings")),
    ("models",                                Directory, None),
    ("models/checkpoints",                    Directory, Some("Intermediate saved model states")),
    ("models/final_models",                   Directory, Some("Final trained models")),
    ("environment",                           Directory, None),
    ("environment/environment.yml",           File,      Some("Environment file (empty placeholder)")),
    ("environment/requirements.txt",          File,      Some("Requirements file (empty placeholder)")),
    ("temp",                                  Directory, Some("Temporary files and cache")),
    ("archive",                               Directory, Some("Backup of old scripts, data, or model versions")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_research_layout_when_validated_then_is_prefix_closed() {
        let spec = LayoutSpec::research();
        let validated = LayoutSpec::new(spec.nodes().to_vec()).expect("research layout is valid");
        assert_eq!(validated, spec);
    }

    #[test]
    fn given_research_layout_then_has_seven_placeholder_files_and_27_dirs() {
        let files: Vec<PathBuf> = LayoutSpec::research()
            .files()
            .map(TreeNode::relative_path)
            .collect();
        let expected: Vec<PathBuf> = [
            "README.md",
            "LICENSE",
            "metadata/project_metadata.txt",
            "metadata/sample_metadata.csv",
            "metadata/experiment_metadata.xlsx",
            "environment/environment.yml",
            "environment/requirements.txt",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(files, expected);
        assert_eq!(LayoutSpec::research().directories().count(), 27);
        assert_eq!(LayoutSpec::research().len(), 34);
    }

    #[test]
    fn given_child_before_parent_when_new_then_missing_parent() {
        let result = LayoutSpec::new(vec![TreeNode::dir("a/b"), TreeNode::dir("a")]);
        assert_eq!(
            result,
            Err(DomainError::MissingParent {
                node: PathBuf::from("a/b"),
                parent: PathBuf::from("a"),
            })
        );
    }

    #[test]
    fn given_node_under_file_when_new_then_parent_not_directory() {
        let result = LayoutSpec::new(vec![TreeNode::file("a"), TreeNode::file("a/b")]);
        assert!(matches!(
            result,
            Err(DomainError::ParentNotDirectory { .. })
        ));
    }

    #[test]
    fn given_duplicate_when_new_then_rejected() {
        let result = LayoutSpec::new(vec![TreeNode::dir("a"), TreeNode::file("a")]);
        assert_eq!(result, Err(DomainError::DuplicateNode(PathBuf::from("a"))));
    }

    #[test]
    fn given_empty_path_when_new_then_rejected() {
        let result = LayoutSpec::new(vec![TreeNode::dir("/")]);
        assert_eq!(result, Err(DomainError::EmptyNode));
    }

    #[test]
    fn given_nested_node_then_parent_and_name_split_correctly() {
        let node = TreeNode::dir("data/raw/imaging");
        assert_eq!(node.name(), "imaging");
        assert_eq!(node.parent_segments(), ["data".to_string(), "raw".to_string()]);
        assert_eq!(node.depth(), 3);
        assert_eq!(node.relative_path(), PathBuf::from("data/raw/imaging"));
    }

    #[test]
    fn given_research_layout_when_children_of_root_then_declared_order() {
        let spec = LayoutSpec::research();
        let top: Vec<&str> = spec.children_of(&[]).map(TreeNode::name).collect();
        assert_eq!(
            top,
            vec![
                "README.md",
                "LICENSE",
                "metadata",
                "data",
                "src",
                "results",
                "docs",
                "notebooks",
                "configs",
                "models",
                "environment",
                "temp",
                "archive",
            ]
        );
    }
}
