//! Constants for dataproc

/// Registry key of the directory scanning pipe
pub const SCAN_DIRECTORY: &str = "scan_directory";

/// Strings that coerce to `false` (compared case-insensitively)
pub const FALSE_WORDS: &[&str] = &["false", "f", "no", "n"];

/// Answers accepted when asking to create a directory
pub const YES_WORDS: &[&str] = &["yes", "y"];

/// Environment variable used for `~` expansion
pub const HOME_ENV: &str = "HOME";
