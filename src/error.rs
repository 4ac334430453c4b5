//! Crate-level error type and `Result` alias

use crate::exit_codes;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: &'static str },

    #[error("Cannot continue: {message}")]
    Precondition { message: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArgument { .. } => exit_codes::USAGE,
            Error::Precondition { .. } | Error::Io(_) => exit_codes::FAILURE,
        }
    }
}
