//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the tollgate tracing/logging system.
///
/// Reads `TOLLGATE_LOG` for per-module log levels, e.g.
/// `TOLLGATE_LOG=tollgate_analysis::classifier=debug,tollgate_analysis::scanner=info`.
///
/// Falls back to `tollgate=info` if `TOLLGATE_LOG` is not set or is invalid.
/// Logs go to stderr so that reports on stdout stay machine-readable.
///
/// Idempotent: calling it more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("tollgate=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
