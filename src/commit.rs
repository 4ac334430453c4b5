//! Validated commit inputs and the stdout report
//!
//! `CommitArgs` can only be built through [`CommitArgs::new`], which runs the
//! precondition checks. A `CommitArgs` value therefore always has a non-empty
//! working directory and base branch.
//!
//! Values are kept as `OsString` and written out as their raw bytes, so
//! arguments that are not valid UTF-8 are echoed unchanged.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::io::Write;

const WORKING_DIR_EMPTY: &str = "working directory is empty";
const BASE_BRANCH_EMPTY: &str = "base branch is empty";

/// Fail with `message` if `value` is empty
pub fn check_precondition(value: &OsStr, message: &'static str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Precondition { message });
    }
    Ok(())
}

/// The three inputs of a pending commit, after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitArgs {
    working_dir: OsString,
    base_branch: OsString,
    commit_message: OsString,
}

impl CommitArgs {
    /// Validates the working directory, then the base branch.
    ///
    /// The commit message is taken as-is, including when empty.
    pub fn new(
        working_dir: impl Into<OsString>,
        base_branch: impl Into<OsString>,
        commit_message: impl Into<OsString>,
    ) -> Result<Self> {
        let working_dir = working_dir.into();
        let base_branch = base_branch.into();

        check_precondition(&working_dir, WORKING_DIR_EMPTY)?;
        check_precondition(&base_branch, BASE_BRANCH_EMPTY)?;

        Ok(CommitArgs {
            working_dir,
            base_branch,
            commit_message: commit_message.into(),
        })
    }

    pub fn working_dir(&self) -> &OsStr {
        &self.working_dir
    }

    pub fn base_branch(&self) -> &OsStr {
        &self.base_branch
    }

    pub fn commit_message(&self) -> &OsStr {
        &self.commit_message
    }

    /// Format the three-line report
    ///
    /// Each line keeps a trailing space before the newline.
    pub fn render(&self) -> Vec<u8> {
        let lines = [
            ("Working directory: ", &self.working_dir),
            ("Base branch: ", &self.base_branch),
            ("Commit msg: ", &self.commit_message),
        ];

        let mut output = Vec::new();
        for (label, value) in lines {
            output.extend_from_slice(label.as_bytes());
            output.extend_from_slice(value.as_encoded_bytes());
            output.extend_from_slice(b" \n");
        }
        output
    }

    /// Write the report to `out` and flush it
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.render())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(args: &CommitArgs) -> String {
        String::from_utf8(args.render()).unwrap()
    }

    #[test]
    fn test_check_precondition_accepts_content() {
        assert!(check_precondition(OsStr::new("/repo"), WORKING_DIR_EMPTY).is_ok());
        assert!(check_precondition(OsStr::new(" "), WORKING_DIR_EMPTY).is_ok());
    }

    #[test]
    fn test_check_precondition_rejects_empty() {
        let err = check_precondition(OsStr::new(""), BASE_BRANCH_EMPTY).unwrap_err();
        match err {
            Error::Precondition { message } => assert_eq!(message, BASE_BRANCH_EMPTY),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_empty_working_dir() {
        let err = CommitArgs::new("", "main", "fix bug").unwrap_err();
        assert_eq!(err.to_string(), "Cannot continue: working directory is empty");
    }

    #[test]
    fn test_new_rejects_empty_base_branch() {
        let err = CommitArgs::new("/repo", "", "fix bug").unwrap_err();
        assert_eq!(err.to_string(), "Cannot continue: base branch is empty");
    }

    #[test]
    fn test_new_checks_working_dir_first() {
        let err = CommitArgs::new("", "", "fix bug").unwrap_err();
        assert_eq!(err.to_string(), "Cannot continue: working directory is empty");
    }

    #[test]
    fn test_new_allows_empty_commit_message() {
        let args = CommitArgs::new("/repo", "main", "").unwrap();
        assert!(args.commit_message().is_empty());
        assert_eq!(
            render_text(&args),
            "Working directory: /repo \nBase branch: main \nCommit msg:  \n"
        );
    }

    #[test]
    fn test_render_basic() {
        let args = CommitArgs::new("/repo", "main", "fix bug").unwrap();
        assert_eq!(args.working_dir(), "/repo");
        assert_eq!(args.base_branch(), "main");
        assert_eq!(
            render_text(&args),
            "Working directory: /repo \nBase branch: main \nCommit msg: fix bug \n"
        );
    }

    #[test]
    fn test_render_keeps_values_verbatim() {
        let args = CommitArgs::new("C:\\work tree", "feature/ä-ö", "line one\nline two").unwrap();
        let output = render_text(&args);
        assert!(output.starts_with("Working directory: C:\\work tree \n"));
        assert!(output.contains("Base branch: feature/ä-ö \n"));
        assert!(output.ends_with("Commit msg: line one\nline two \n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_render_non_utf8_bytes() {
        use std::os::unix::ffi::OsStringExt;

        let working_dir = OsString::from_vec(vec![b'/', 0xff]);
        let args = CommitArgs::new(working_dir, "main", "fix").unwrap();
        assert_eq!(
            args.render(),
            b"Working directory: /\xff \nBase branch: main \nCommit msg: fix \n".to_vec()
        );
    }

    #[test]
    fn test_write_report_matches_render() {
        let args = CommitArgs::new("/repo", "main", "fix bug").unwrap();
        let mut buf = Vec::new();
        args.write_report(&mut buf).unwrap();
        assert_eq!(buf, args.render());
    }

    #[test]
    fn test_render_is_stable() {
        let args = CommitArgs::new("/repo", "main", "fix bug").unwrap();
        assert_eq!(args.render(), args.render());
    }
}
