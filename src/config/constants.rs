//! Constants for the dataproc command line

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Log filter used with `--verbose` and for the log file
pub const DEBUG_FILTER: &str = "debug";

/// Manipulation path meaning "read from stdin"
pub const STDIN_MARKER: &str = "-";
