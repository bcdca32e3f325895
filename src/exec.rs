//! External command execution.

use std::process::Command;

use crate::error::{Error, Result};

/// Runs an external program and captures its output.
///
/// This is the single seam between the pipeline and the host system; tests
/// swap in a scripted runner instead of spawning processes.
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// On zero exit, returns stdout split into lines (trailing terminator
    /// stripped, no further trimming); stderr is discarded. A non-zero exit
    /// surfaces the captured stderr, and a program that cannot be started is
    /// reported separately from one that ran and failed.
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<String>>;
}

/// Runner backed by `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<String>> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::CommandStart {
                command: render(program, args),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandExit {
                command: render(program, args),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_string).collect())
    }
}

/// One-line rendering of a command for error messages and the test call log.
pub(crate) fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout_as_lines() {
        let lines = SystemRunner.run("printf", &["one\ntwo\n"]).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_empty_stdout_yields_no_lines() {
        let lines = SystemRunner.run("true", &[]).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_nonzero_exit_is_an_exit_failure() {
        let err = SystemRunner.run("false", &[]).unwrap_err();
        assert!(matches!(err, Error::CommandExit { .. }));
    }

    #[test]
    fn test_exit_failure_surfaces_stderr() {
        let err = SystemRunner
            .run("sh", &["-c", "echo broken >&2; exit 3"])
            .unwrap_err();
        match err {
            Error::CommandExit { command, stderr } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(stderr, "broken");
            }
            other => panic!("expected exit failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_a_start_failure() {
        let err = SystemRunner
            .run("gitweb-no-such-program", &[])
            .unwrap_err();
        match err {
            Error::CommandStart { command, .. } => {
                assert_eq!(command, "gitweb-no-such-program");
            }
            other => panic!("expected start failure, got {other:?}"),
        }
    }

    #[test]
    fn test_render_joins_program_and_args() {
        assert_eq!(render("git", &["remote", "get-url", "origin"]), "git remote get-url origin");
        assert_eq!(render("git", &[]), "git");
    }
}
