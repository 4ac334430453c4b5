#![forbid(unsafe_code)]

//! commit-args: validate and echo the inputs of a pending commit
//!
//! Takes a working directory, a base branch and a commit message, checks that
//! the first two are present, and prints a three-line report. No repository
//! is read or modified.

pub mod cli;
pub mod commit;
pub mod error;
pub mod exit_codes;
pub mod logging;

pub use commit::{CommitArgs, check_precondition};
pub use error::{Error, Result};
