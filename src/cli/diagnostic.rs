//! Fatal error rendering on stderr

use crate::error::Error;
use std::io::{self, IsTerminal};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Write `error: <message>` to `out`, coloring the prefix when supported
pub fn write_error<W: WriteColor>(out: &mut W, err: &Error) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "error:")?;
    out.reset()?;
    writeln!(out, " {}", err)?;
    out.flush()
}

/// Print `err` to stderr, colored only when stderr is a terminal
pub fn print_error(err: &Error) {
    let mut stderr = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
    if write_error(&mut stderr, err).is_err() {
        // Nowhere left to report to.
        eprintln!("error: {}", err);
    }
}

/// `Auto` still honors `TERM` and `NO_COLOR`; it does not detect pipes.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
