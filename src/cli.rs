//! CLI argument parsing and dispatch

pub mod args;
pub mod diagnostic;

// Re-export types for convenient access
pub use args::Cli;
pub use diagnostic::{print_error, write_error};

use crate::error::Result;
use std::io;
use tracing::debug;

/// Validate the invocation and write the report to stdout
pub fn run(cli: Cli) -> Result<()> {
    let commit = cli.into_commit_args()?;
    debug!(
        working_dir = ?commit.working_dir(),
        base_branch = ?commit.base_branch(),
        "preconditions passed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commit.write_report(&mut out)
}
