//! Discovered directory records and their path-keyed edges

pub mod link;

pub use link::{get, get_mut, validate_link};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Classification of a discovered directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Terminal data unit: the directory itself matches a whitelist pattern
    Run,
    /// Container: one of its immediate children matches a whitelist pattern
    Project,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Run => f.write_str("run"),
            NodeType::Project => f.write_str("project"),
        }
    }
}

/// A node is keyed by its absolute `path`; edges hold paths, not references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub path: PathBuf,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub parents: Vec<PathBuf>,
    #[serde(default)]
    pub children: Vec<PathBuf>,
}

impl Node {
    /// Node without edges, named after the last path component
    pub fn new(path: impl Into<PathBuf>, node_type: NodeType) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            node_type,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_run(&self) -> bool {
        self.node_type == NodeType::Run
    }

    pub fn is_project(&self) -> bool {
        self.node_type == NodeType::Project
    }

    /// Add a parent edge unless already present
    pub fn add_parent(&mut self, path: &Path) -> bool {
        push_unique(&mut self.parents, path)
    }

    /// Add a child edge unless already present
    pub fn add_child(&mut self, path: &Path) -> bool {
        push_unique(&mut self.children, path)
    }
}

fn push_unique(edges: &mut Vec<PathBuf>, path: &Path) -> bool {
    if edges.iter().any(|p| p == path) {
        return false;
    }
    edges.push(path.to_path_buf());
    true
}

/// The accumulator threaded through pipeline steps
pub type NodeList = Vec<Node>;
