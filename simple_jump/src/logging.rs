//! Development-time tracing for debugging dispatch.
//!
//! Diagnostics go to stderr only. They never change stdout or the exit
//! status, which stays a function of the argument list alone.
//!
//! Events emitted at `debug`:
//!
//! - `dispatched` (`core::dispatcher`): argument count, chosen behavior,
//!   first byte and raw result.
//! - `invocation finished` (`invocation`): behavior, raw result and the
//!   truncated exit code.
//!
//! Rejected argument lists are not logged here; `main` reports them once on
//! stderr before exiting with `exit_codes::INVALID`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=simple_jump=debug cargo run -- extra
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
