//! Run/project discovery over a directory tree

use crate::config::constants::SCAN_DIRECTORY;
use crate::error::{DataProcError, PipelineError, Result};
use crate::node::{Node, NodeList, NodeType, get, validate_link};
use crate::pipeline::args::{arg_str, arg_str_list};
use crate::pipeline::{Kwds, Pipe};
use crate::util::{WhitelistPattern, check_directory};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `scan_directory(root_path, whitelist)`
pub struct ScanDirectory;

impl Pipe for ScanDirectory {
    fn name(&self) -> String {
        SCAN_DIRECTORY.to_string()
    }

    fn args(&self) -> Vec<String> {
        vec!["root_path".to_string(), "whitelist".to_string()]
    }

    fn description(&self) -> String {
        "scan directory structure".to_string()
    }

    fn process(&self, nodes: NodeList, args: &[Value], _kwds: &Kwds) -> Result<NodeList> {
        let root = arg_str(SCAN_DIRECTORY, args, 0, "root_path")?;
        let whitelist = arg_str_list(SCAN_DIRECTORY, args, 1, "whitelist")?;
        directory(nodes, root, whitelist.as_slice())
    }
}

/// Search run and project nodes in every directory under `root`
///
/// A directory is a run node when `dir/<pattern>` matches for some
/// whitelist pattern; its parent directory is recorded as its parent. It is
/// a project node when `dir/<child>/<pattern>` matches for some immediate
/// subdirectory; every such child is recorded. When both hold the node is a
/// run node and keeps its children.
///
/// Directories already present in `nodes` are not emitted again but their
/// subtrees are still scanned. New nodes are appended in pre-order with
/// subdirectories visited in lexicographic order, then their reverse edges
/// are completed against the whole list.
pub fn directory<S: AsRef<str>>(
    mut nodes: NodeList,
    root: impl AsRef<Path>,
    whitelist: &[S],
) -> Result<NodeList> {
    if whitelist.is_empty() {
        return Err(PipelineError::invalid_argument(SCAN_DIRECTORY, "whitelist is empty").into());
    }
    let patterns = whitelist
        .iter()
        .map(|w| WhitelistPattern::new(w.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    let root = check_directory(root)?;

    let scanned = walk(&nodes, &root, &patterns)?;
    info!(
        "Scanned {}: {} new nodes ({} runs) appended to {} existing",
        root.display(),
        scanned.len(),
        scanned.iter().filter(|n| n.is_run()).count(),
        nodes.len()
    );

    let new_paths: Vec<PathBuf> = scanned.iter().map(|n| n.path.clone()).collect();
    nodes.extend(scanned);
    for path in &new_paths {
        validate_link(&mut nodes, path, true)?;
    }
    Ok(nodes)
}

struct Subdir {
    path: PathBuf,
    // symlinked directories are tested but never descended into
    is_link: bool,
}

fn walk(known: &[Node], root: &Path, patterns: &[WhitelistPattern]) -> Result<Vec<Node>> {
    let mut found = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let subdirs = list_subdirs(&dir)?;

        if get(known, &dir).is_some() {
            debug!("Skipping known node {}", dir.display());
        } else if let Some(node) = classify(&dir, &subdirs, patterns)? {
            debug!("Found {} node {}", node.node_type, node.path.display());
            found.push(node);
        }

        stack.extend(
            subdirs
                .into_iter()
                .rev()
                .filter(|s| !s.is_link)
                .map(|s| s.path),
        );
    }

    Ok(found)
}

fn list_subdirs(dir: &Path) -> Result<Vec<Subdir>> {
    let read_err = |e: std::io::Error| DataProcError::read_dir(dir, e);
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let file_type = entry.file_type().map_err(read_err)?;
        let path = entry.path();
        if file_type.is_dir() {
            subdirs.push(Subdir {
                path,
                is_link: false,
            });
        } else if file_type.is_symlink() && path.is_dir() {
            subdirs.push(Subdir {
                path,
                is_link: true,
            });
        }
    }

    subdirs.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(subdirs)
}

fn classify(dir: &Path, subdirs: &[Subdir], patterns: &[WhitelistPattern]) -> Result<Option<Node>> {
    let mut node_type = None;
    let mut children = Vec::new();
    let mut parents = Vec::new();

    for sub in subdirs {
        if matches_any(&sub.path, patterns)? {
            node_type = Some(NodeType::Project);
            children.push(sub.path.clone());
        }
    }

    // run wins over project
    if matches_any(dir, patterns)? {
        node_type = Some(NodeType::Run);
        if let Some(parent) = dir.parent() {
            parents.push(parent.to_path_buf());
        }
    }

    Ok(node_type.map(|node_type| {
        let mut node = Node::new(dir, node_type);
        node.parents = parents;
        node.children = children;
        node
    }))
}

fn matches_any(dir: &Path, patterns: &[WhitelistPattern]) -> Result<bool> {
    for pattern in patterns {
        if pattern
            .matches_in(dir)
            .map_err(|e| DataProcError::read_dir(dir, e))?
        {
            return Ok(true);
        }
    }
    Ok(false)
}
