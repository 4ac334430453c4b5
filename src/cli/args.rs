//! Positional argument definitions
//!
//! All three inputs are declared optional so that a short invocation surfaces
//! as [`Error::MissingArgument`] instead of a clap usage error. Values are
//! `OsString`, so non-UTF-8 input is carried through untouched.

use crate::commit::CommitArgs;
use crate::error::{Error, Result};
use clap::Parser;
use std::ffi::OsString;
use tracing::debug;

const BIN_NAME: &str = "commit-args";

#[derive(Debug, Parser)]
#[command(
    name = "commit-args",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Directory the commit would be made in
    #[arg(value_name = "WORKING_DIRECTORY")]
    pub working_dir: Option<OsString>,

    /// Branch the commit would be based on
    #[arg(value_name = "BASE_BRANCH")]
    pub base_branch: Option<OsString>,

    /// Message for the commit
    #[arg(value_name = "COMMIT_MESSAGE")]
    pub commit_message: Option<OsString>,

    /// Anything past the third value is accepted and ignored
    #[arg(hide = true)]
    pub surplus: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments
    pub fn from_env() -> Self {
        Self::from_values(std::env::args_os().skip(1))
    }

    /// Parse `values`, excluding the binary name.
    ///
    /// A leading `--` is passed to clap ahead of the values, so every token
    /// after it (including another `--` or anything starting with `-`) is
    /// taken as a positional value.
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from(BIN_NAME), OsString::from("--")]
            .into_iter()
            .chain(values.into_iter().map(Into::into));
        Self::parse_from(argv)
    }

    /// Convert the raw invocation into validated commit arguments.
    ///
    /// The first absent positional is reported. Present values then go
    /// through the precondition checks of [`CommitArgs::new`].
    pub fn into_commit_args(self) -> Result<CommitArgs> {
        let working_dir = self.working_dir.ok_or(Error::MissingArgument {
            arg: "working-directory",
        })?;
        let base_branch = self.base_branch.ok_or(Error::MissingArgument {
            arg: "base-branch",
        })?;
        let commit_message = self.commit_message.ok_or(Error::MissingArgument {
            arg: "commit-message",
        })?;

        if !self.surplus.is_empty() {
            debug!(count = self.surplus.len(), "ignoring surplus arguments");
        }

        CommitArgs::new(working_dir, base_branch, commit_message)
    }
}
