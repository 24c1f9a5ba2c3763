// Pipes shipped with the crate
pub mod scan;

pub use scan::{ScanDirectory, directory};

use crate::pipeline::PipeRegistry;

/// Register all built-in pipes
pub fn register_pipes(registry: &mut PipeRegistry) {
    registry.register(Box::new(ScanDirectory));
}
