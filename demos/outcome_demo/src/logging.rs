//! Tracing subscriber setup for the demo.
use tracing_subscriber::EnvFilter;

use crate::error::{DemoError, Result};

/// Installs a `fmt` subscriber writing to standard error.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `info`.
///
/// # Errors
///
/// Returns [`DemoError::Logging`] when a global subscriber is already set.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(DemoError::Logging)
}
