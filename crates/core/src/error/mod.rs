/// Centralized error handling for dataproc
pub mod dataproc;
pub mod link;
pub mod pipeline;

pub use dataproc::{DataProcError, Result};
pub use link::{LinkError, Relation};
pub use pipeline::{PipelineError, PipelineResult};
