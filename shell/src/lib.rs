//! Starchart Application Shell
//!
//! This is the thin application shell that wires configuration, logging and
//! the per-resource stores together, and exposes the commands the
//! presentation layer calls. Core business logic lives in the `crates/`
//! directory.

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

pub use error::CommandError;
pub use state::AppState;
pub use view::{DetailView, ListView};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,starchart=debug";

/// Initialize tracing subscriber for logging.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Tracing initialized");
    }
}

/// Get application version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
