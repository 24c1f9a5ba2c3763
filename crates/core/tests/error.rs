// Unit tests for error handling
use dataproc_core::{DataProcError, PipelineError};
use std::io;
use std::path::Path;

#[test]
fn test_error_from_io() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: DataProcError = io_err.into();

    assert!(matches!(err, DataProcError::Io(_)));
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_pipeline_errors_carry_pipe_name() {
    let err = PipelineError::unknown_operation("scan");
    assert_eq!(err.to_string(), "while processing pipe[scan]: invalid pipe name");

    let err = PipelineError::arity_mismatch("scan_directory", 2, 3);
    assert_eq!(
        err.to_string(),
        "while processing pipe[scan_directory]: the number of arguments mismatches (expected 2, got 3)"
    );

    let wrapped: DataProcError = err.into();
    assert!(wrapped.to_string().starts_with("while processing pipe[scan_directory]"));
}

#[test]
fn test_read_dir_error() {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = DataProcError::read_dir(Path::new("/locked"), source);
    assert_eq!(err.to_string(), "Cannot read directory '/locked': denied");
}

#[test]
fn test_error_from_str() {
    let err: DataProcError = "something".into();
    assert!(matches!(err, DataProcError::Other(_)));
    assert_eq!(err.to_string(), "something");
}
