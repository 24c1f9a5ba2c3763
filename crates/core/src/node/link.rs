//! Path lookup and reverse-edge completion over a node list

use super::Node;
use crate::error::{DataProcError, LinkError, Relation, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Exact-path lookup
pub fn get<'a>(nodes: &'a [Node], path: &Path) -> Option<&'a Node> {
    nodes.iter().find(|n| n.path == path)
}

pub fn get_mut<'a>(nodes: &'a mut [Node], path: &Path) -> Option<&'a mut Node> {
    nodes.iter_mut().find(|n| n.path == path)
}

/// Complete the reverse edges of the node at `path`
///
/// For each parent of the node, the node is added to that parent's
/// children, and likewise for each child. When a counterpart is missing
/// from the list the edge stays one-sided if `silent`, otherwise a
/// [`LinkError`] is returned.
pub fn validate_link(nodes: &mut [Node], path: &Path, silent: bool) -> Result<()> {
    let Some(node) = get(nodes, path) else {
        if silent {
            debug!("Skipping link validation of unknown node {}", path.display());
            return Ok(());
        }
        return Err(DataProcError::path(format!(
            "Node '{}' is not in the node list",
            path.display()
        )));
    };
    let parents = node.parents.clone();
    let children = node.children.clone();

    for parent in &parents {
        link_one(nodes, path, parent, Relation::Parent, silent)?;
    }
    for child in &children {
        link_one(nodes, path, child, Relation::Child, silent)?;
    }
    Ok(())
}

fn link_one(
    nodes: &mut [Node],
    from: &Path,
    to: &PathBuf,
    relation: Relation,
    silent: bool,
) -> Result<()> {
    if to == from {
        if silent {
            debug!("Ignoring self link on {}", from.display());
            return Ok(());
        }
        return Err(LinkError::SelfReference {
            path: from.to_path_buf(),
        }
        .into());
    }

    match get_mut(nodes, to) {
        Some(counterpart) => {
            let added = match relation {
                Relation::Parent => counterpart.add_child(from),
                Relation::Child => counterpart.add_parent(from),
            };
            if added {
                debug!(
                    "Linked {} as {} of {}",
                    to.display(),
                    relation,
                    from.display()
                );
            }
            Ok(())
        }
        None if silent => {
            debug!(
                "{} {} of {} not found, edge left one-sided",
                relation,
                to.display(),
                from.display()
            );
            Ok(())
        }
        None => Err(LinkError::Unresolved {
            from: from.to_path_buf(),
            to: to.clone(),
            relation,
        }
        .into()),
    }
}
