//! Logging setup for the dataproc binary

use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::constants::{DEBUG_FILTER, DEFAULT_FILTER};

/// Create log file with proper options
pub fn create_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// Install the stderr layer and, when requested, a debug log file layer
pub fn init(verbose: bool, log_file: Option<&Path>) -> std::io::Result<()> {
    let default_filter = if verbose { DEBUG_FILTER } else { DEFAULT_FILTER };

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_writer(create_log_file(path)?)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new(DEBUG_FILTER)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(default_filter)),
                ),
        )
        .with(file_layer)
        .init();

    Ok(())
}
