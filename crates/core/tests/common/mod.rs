// Shared fixtures for integration tests
#![allow(dead_code)]

use dataproc_core::{Node, NodeType};
use std::fs;
use std::path::{Path, PathBuf};

/// Build the reference tree:
///
/// ```text
/// root/run0/test.conf
/// root/run0/run0/data/hoge.conf
/// root/run0/run1/test.conf
/// root/run1/test.conf
/// root/run2/data/test.conf
/// ```
pub fn generate_test_directories(root: &Path) {
    for i in 0..3 {
        fs::create_dir_all(root.join(format!("run{i}"))).unwrap();
    }
    for i in 0..2 {
        fs::write(root.join(format!("run{i}")).join("test.conf"), "").unwrap();
    }
    for i in 0..2 {
        fs::create_dir_all(root.join("run0").join(format!("run{i}"))).unwrap();
    }
    fs::create_dir_all(root.join("run2/data")).unwrap();
    fs::create_dir_all(root.join("run0/run0/data")).unwrap();
    fs::write(root.join("run0/run1/test.conf"), "").unwrap();
    fs::write(root.join("run2/data/test.conf"), "").unwrap();
    fs::write(root.join("run0/run0/data/hoge.conf"), "").unwrap();
}

pub fn node(path: PathBuf, node_type: NodeType, parents: &[PathBuf], children: &[PathBuf]) -> Node {
    let mut node = Node::new(path, node_type);
    node.parents = parents.to_vec();
    node.children = children.to_vec();
    node
}
