//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Logweave tracing/logging system.
///
/// Reads `LOGWEAVE_LOG` environment variable for per-subsystem log levels.
/// Format: `LOGWEAVE_LOG=logweave_engine::profiles=debug,logweave_engine::ops=info`
///
/// Falls back to `logweave=info` if `LOGWEAVE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LOGWEAVE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("logweave=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
