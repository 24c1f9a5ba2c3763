// Unit tests for node lookup and link completion
use dataproc_core::error::Relation;
use dataproc_core::node::{get, get_mut, validate_link};
use dataproc_core::{DataProcError, LinkError, Node, NodeType};
use std::path::{Path, PathBuf};

fn nodes() -> Vec<Node> {
    let mut project = Node::new("/p", NodeType::Project);
    project.children.push(PathBuf::from("/p/a"));

    let mut run_a = Node::new("/p/a", NodeType::Run);
    run_a.parents.push(PathBuf::from("/p"));

    let run_b = Node::new("/p/b", NodeType::Run);
    vec![project, run_a, run_b]
}

#[test]
fn test_get() {
    let mut list = nodes();
    assert_eq!(get(&list, Path::new("/p/a")).unwrap().name, "a");
    assert!(get(&list, Path::new("/missing")).is_none());

    get_mut(&mut list, Path::new("/p/b")).unwrap().node_type = NodeType::Project;
    assert!(list[2].is_project());
}

#[test]
fn test_validate_link_adds_reverse_edge() {
    let mut list = nodes();
    list[2].parents.push(PathBuf::from("/p"));

    validate_link(&mut list, Path::new("/p/b"), true).unwrap();

    assert_eq!(
        list[0].children,
        vec![PathBuf::from("/p/a"), PathBuf::from("/p/b")]
    );
}

#[test]
fn test_validate_link_does_not_duplicate() {
    let mut list = nodes();
    validate_link(&mut list, Path::new("/p"), false).unwrap();
    validate_link(&mut list, Path::new("/p/a"), false).unwrap();

    assert_eq!(list[0].children, vec![PathBuf::from("/p/a")]);
    assert_eq!(list[1].parents, vec![PathBuf::from("/p")]);
}

#[test]
fn test_validate_link_silent_tolerates_gaps() {
    let mut list = nodes();
    list[2].parents.push(PathBuf::from("/elsewhere"));
    let before = list.clone();

    validate_link(&mut list, Path::new("/p/b"), true).unwrap();
    assert_eq!(list, before);
}

#[test]
fn test_validate_link_strict_reports_gaps() {
    let mut list = nodes();
    list[2].children.push(PathBuf::from("/p/b/missing"));

    let err = validate_link(&mut list, Path::new("/p/b"), false).unwrap_err();
    match err {
        DataProcError::Link(LinkError::Unresolved { from, to, relation }) => {
            assert_eq!(from, PathBuf::from("/p/b"));
            assert_eq!(to, PathBuf::from("/p/b/missing"));
            assert_eq!(relation, Relation::Child);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_link_strict_rejects_self_reference() {
    let mut list = nodes();
    list[2].parents.push(PathBuf::from("/p/b"));

    let err = validate_link(&mut list, Path::new("/p/b"), false).unwrap_err();
    assert!(matches!(
        err,
        DataProcError::Link(LinkError::SelfReference { .. })
    ));
    assert!(validate_link(&mut list, Path::new("/p/b"), true).is_ok());
}

#[test]
fn test_validate_link_unknown_node() {
    let mut list = nodes();
    assert!(validate_link(&mut list, Path::new("/nope"), true).is_ok());
    assert!(matches!(
        validate_link(&mut list, Path::new("/nope"), false),
        Err(DataProcError::Path(_))
    ));
}
