//! Typed access to positional arguments of a manipulation step

use crate::error::{PipelineError, PipelineResult};
use serde_json::Value;

fn arg<'a>(pipe: &str, args: &'a [Value], index: usize, arg_name: &str) -> PipelineResult<&'a Value> {
    args.get(index).ok_or_else(|| {
        PipelineError::invalid_argument(pipe, format!("missing argument '{arg_name}'"))
    })
}

/// String argument at `index`
pub fn arg_str<'a>(
    pipe: &str,
    args: &'a [Value],
    index: usize,
    arg_name: &str,
) -> PipelineResult<&'a str> {
    let value = arg(pipe, args, index, arg_name)?;
    value.as_str().ok_or_else(|| {
        PipelineError::invalid_argument(
            pipe,
            format!("argument '{arg_name}' should be a string, got {value}"),
        )
    })
}

/// Array-of-strings argument at `index`
pub fn arg_str_list(
    pipe: &str,
    args: &[Value],
    index: usize,
    arg_name: &str,
) -> PipelineResult<Vec<String>> {
    let value = arg(pipe, args, index, arg_name)?;
    let invalid = || {
        PipelineError::invalid_argument(
            pipe,
            format!("argument '{arg_name}' should be an array of strings, got {value}"),
        )
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
