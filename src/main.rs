//! commit-args entrypoint.
//!
//! Parses the three positionals, dispatches to `cli::run`, and exits with the
//! status defined in `exit_codes`.

use commit_args::cli::{self, Cli};
use commit_args::{exit_codes, logging};

fn main() {
    logging::init();

    let args = Cli::from_env();
    match cli::run(args) {
        Ok(()) => std::process::exit(exit_codes::OK),
        Err(err) => {
            cli::print_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
