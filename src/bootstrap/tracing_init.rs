//! Tracing initialization utilities.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr tracing subscriber with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// The subscriber is only active on the current thread while the returned
/// guard is alive, so nothing global is left behind once it drops.
///
/// Stdout is never written to; it is reserved for the generated token.
///
/// # Example
///
/// ```rust
/// use secure_keygen::scoped_tracing;
///
/// let _guard = scoped_tracing("secure_keygen=debug,info");
/// tracing::info!("logging to stderr");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `secure_keygen=debug` - Enable debug level for the library
/// - `secure_keygen=debug,info` - Debug for the library, info for everything else
pub fn scoped_tracing(default_filter: &str) -> DefaultGuard {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .set_default()
}
