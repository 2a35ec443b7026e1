//! Tracing initialization. Logs go to stderr; stdout is reserved for the timeline.

use std::sync::Once;

use storyline_core::constants::LOG_ENV_VAR;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads `STORYLINE_LOG` for filtering (e.g. `STORYLINE_LOG=storyline_tracking=debug`)
/// and falls back to `default_filter` if it is unset or invalid.
/// Calling this more than once has no effect.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
