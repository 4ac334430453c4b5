//! Diagnostic tracing for the commit-args binary.
//!
//! Output goes to stderr only. Stdout carries the report and nothing else.

use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or invalid.
/// ANSI styling is used only when stderr is a terminal.
///
/// ```bash
/// RUST_LOG=commit_args=debug commit-args /repo main "fix bug"
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .compact(),
        )
        .init();
}
