// Pipeline core - pipe contract and accumulator threading

use super::manip::{self, ManipulationStep};
use super::registry::PipeRegistry;
use crate::error::{PipelineError, PipelineResult, Result};
use crate::node::NodeList;
use serde_json::{Map, Value};
use tracing::debug;

/// Keyword arguments of a manipulation step
pub type Kwds = Map<String, Value>;

/// A named operation over the node list
pub trait Pipe: Send + Sync {
    fn name(&self) -> String;

    /// Names of the positional arguments, in order
    fn args(&self) -> Vec<String>;

    /// Keyword names the pipe accepts, `None` when it declares none
    fn kwds(&self) -> Option<Vec<String>> {
        None
    }

    fn description(&self) -> String;

    fn process(&self, nodes: NodeList, args: &[Value], kwds: &Kwds) -> Result<NodeList>;
}

/// Adapter turning a closure into a [`Pipe`]
pub struct FnPipe<F> {
    name: String,
    args: Vec<String>,
    kwds: Option<Vec<String>>,
    description: String,
    func: F,
}

impl<F> FnPipe<F>
where
    F: Fn(NodeList, &[Value], &Kwds) -> Result<NodeList> + Send + Sync,
{
    pub fn new<I, S>(name: impl Into<String>, args: I, func: F, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            kwds: None,
            description: description.into(),
            func,
        }
    }

    /// Declare the keyword names forwarded to the closure
    pub fn with_kwds<I, S>(mut self, kwds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kwds = Some(kwds.into_iter().map(Into::into).collect());
        self
    }
}

impl<F> Pipe for FnPipe<F>
where
    F: Fn(NodeList, &[Value], &Kwds) -> Result<NodeList> + Send + Sync,
{
    fn name(&self) -> String {
        self.name.clone()
    }

    fn args(&self) -> Vec<String> {
        self.args.clone()
    }

    fn kwds(&self) -> Option<Vec<String>> {
        self.kwds.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn process(&self, nodes: NodeList, args: &[Value], kwds: &Kwds) -> Result<NodeList> {
        (self.func)(nodes, args, kwds)
    }
}

struct ResolvedStep<'r> {
    pipe: &'r dyn Pipe,
    args: Vec<Value>,
    kwds: Kwds,
}

/// A manipulation whose steps have all been checked against a registry
pub struct Pipeline<'r> {
    steps: Vec<ResolvedStep<'r>>,
}

impl<'r> Pipeline<'r> {
    /// Resolve every step before anything runs
    ///
    /// Unknown names and argument count mismatches are reported here, so a
    /// malformed step never runs after earlier steps have done their work.
    /// Keyword arguments the pipe does not declare are dropped.
    pub fn resolve(registry: &'r PipeRegistry, steps: Vec<ManipulationStep>) -> PipelineResult<Self> {
        let mut resolved = Vec::with_capacity(steps.len());

        for step in steps {
            let pipe = registry.lookup(&step.name)?;

            let expected = pipe.args().len();
            if step.args.len() != expected {
                return Err(PipelineError::arity_mismatch(
                    &step.name,
                    expected,
                    step.args.len(),
                ));
            }

            let kwds = filter_kwds(pipe, &step.name, step.kwds);
            resolved.push(ResolvedStep {
                pipe,
                args: step.args,
                kwds,
            });
        }

        Ok(Self { steps: resolved })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Fold the node list through every step in order
    pub fn execute(&self, nodes: NodeList) -> Result<NodeList> {
        debug!("Executing manipulation with {} steps", self.steps.len());

        self.steps
            .iter()
            .enumerate()
            .try_fold(nodes, |nodes, (index, step)| {
                debug!(
                    "Processing step {}: '{}' with {} nodes",
                    index + 1,
                    step.pipe.name(),
                    nodes.len()
                );
                let nodes = step.pipe.process(nodes, &step.args, &step.kwds)?;
                debug!("Step '{}' returned {} nodes", step.pipe.name(), nodes.len());
                Ok(nodes)
            })
    }
}

fn filter_kwds(pipe: &dyn Pipe, name: &str, kwds: Option<Kwds>) -> Kwds {
    let (Some(kwds), Some(allowed)) = (kwds, pipe.kwds()) else {
        return Kwds::new();
    };

    kwds.into_iter()
        .filter(|(key, _)| {
            let keep = allowed.iter().any(|a| a == key);
            if !keep {
                debug!("Dropping undeclared keyword '{}' for pipe '{}'", key, name);
            }
            keep
        })
        .collect()
}

/// Run a manipulation starting from an empty node list
pub fn execute(registry: &PipeRegistry, steps: Vec<ManipulationStep>) -> Result<NodeList> {
    let pipeline = Pipeline::resolve(registry, steps)?;
    pipeline.execute(NodeList::new())
}

/// Parse a JSON manipulation document and run it
pub fn execute_from_json_str(registry: &PipeRegistry, json: &str) -> Result<NodeList> {
    let steps = manip::from_json_str(json)?;
    execute(registry, steps)
}
