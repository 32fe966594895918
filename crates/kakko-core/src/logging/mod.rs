//! Structured JSON logging to stderr.
//!
//! stdout belongs to the hook protocol and to user-facing command output, so
//! log lines only ever go to stderr. Quiet mode (the default) installs a
//! filter that drops every event; the host tool shows hook stderr to the user
//! and must not see log noise from a successful run.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Filter directive used when `quiet` is false and `RUST_LOG` is unset.
const VERBOSE_DIRECTIVE: &str = "info";

/// Build the filter for the given verbosity.
///
/// `RUST_LOG` refines the verbose filter but never re-enables logging in
/// quiet mode.
fn build_filter(quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("off");
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(VERBOSE_DIRECTIVE))
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(quiet: bool) {
    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(quiet))
        .with(layer)
        .try_init();
}
