//! Stable exit codes for the commit-args binary.

/// Report written to stdout.
pub const OK: i32 = 0;
/// A precondition failed or stdout could not be written.
pub const FAILURE: i32 = 1;
/// A required positional argument was not supplied.
pub const USAGE: i32 = 2;
