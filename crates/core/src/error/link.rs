use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of an edge could not be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Child,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Parent => f.write_str("parent"),
            Relation::Child => f.write_str("child"),
        }
    }
}

/// Link consistency errors, only raised by strict validation
#[derive(Error, Debug)]
pub enum LinkError {
    #[error("{relation} '{to}' of node '{from}' is not in the node list")]
    Unresolved {
        from: PathBuf,
        to: PathBuf,
        relation: Relation,
    },

    #[error("node '{path}' links to itself")]
    SelfReference { path: PathBuf },
}
