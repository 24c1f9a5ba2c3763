// Pipeline module - registry, manipulation input and execution

pub mod args;
pub mod core;
pub mod manip;
pub mod registry;

pub use self::core::{FnPipe, Kwds, Pipe, Pipeline, execute, execute_from_json_str};
pub use manip::ManipulationStep;
pub use registry::PipeRegistry;
