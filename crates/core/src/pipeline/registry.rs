// Pipe registry for name-based pipe lookup
use super::core::{FnPipe, Kwds, Pipe};
use crate::error::{PipelineError, PipelineResult, Result};
use crate::node::NodeList;
use crate::pipes;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

/// Registry of pipes keyed by name, in registration order
pub struct PipeRegistry {
    pipes: IndexMap<String, Box<dyn Pipe>>,
}

impl PipeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            pipes: IndexMap::new(),
        }
    }

    /// Registry holding every pipe shipped with this crate
    pub fn with_default_pipes() -> Self {
        let mut registry = Self::new();
        pipes::register_pipes(&mut registry);
        registry
    }

    /// Register a pipe under its own name; a later registration replaces an earlier one
    pub fn register(&mut self, pipe: Box<dyn Pipe>) {
        let name = pipe.name();
        if self.pipes.insert(name.clone(), pipe).is_some() {
            warn!("Pipe '{}' was registered twice, keeping the latest", name);
        }
    }

    /// Register a closure with its positional argument names
    pub fn register_fn<F, I, S>(
        &mut self,
        name: impl Into<String>,
        args: I,
        func: F,
        description: impl Into<String>,
    ) where
        F: Fn(NodeList, &[Value], &Kwds) -> Result<NodeList> + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(Box::new(FnPipe::new(name, args, func, description)));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Pipe> {
        self.pipes.get(name).map(|pipe| pipe.as_ref())
    }

    /// Like [`get`](Self::get), failing with `UnknownOperation`
    pub fn lookup(&self, name: &str) -> PipelineResult<&dyn Pipe> {
        self.get(name)
            .ok_or_else(|| PipelineError::unknown_operation(name))
    }

    /// Check if a pipe is registered
    pub fn contains(&self, name: &str) -> bool {
        self.pipes.contains_key(name)
    }

    /// Iterate over registered pipes in registration order
    pub fn list_pipes(&self) -> impl Iterator<Item = &dyn Pipe> {
        self.pipes.values().map(|pipe| pipe.as_ref())
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

impl Default for PipeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
