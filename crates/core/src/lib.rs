//! Run/project discovery over directory trees and a small pipeline engine
//! that threads a node list through named operations.

pub mod config;
pub mod error;
pub mod node;
pub mod pipeline;
pub mod pipes;
pub mod util;

pub use error::{DataProcError, LinkError, PipelineError, Result};
pub use node::{Node, NodeList, NodeType};
pub use pipeline::{ManipulationStep, Pipe, PipeRegistry, execute, execute_from_json_str};
