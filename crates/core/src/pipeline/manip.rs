// Manipulation steps - the wire form of a pipeline invocation
use super::core::Kwds;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named pipe invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManipulationStep {
    pub name: String,
    pub args: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kwds: Option<Kwds>,
}

impl ManipulationStep {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
            kwds: None,
        }
    }

    pub fn with_kwds(mut self, kwds: Kwds) -> Self {
        self.kwds = Some(kwds);
        self
    }
}

/// Parse a manipulation document: a JSON array of steps
pub fn from_json_str(json: &str) -> Result<Vec<ManipulationStep>> {
    Ok(serde_json::from_str(json)?)
}
