//! The git collaborator: listing remotes and resolving their addresses.

use crate::error::{Error, Result};
use crate::exec::CommandRunner;

/// List configured remote names, in the order git reports them.
///
/// Fails when the working directory is not inside a repository or git is
/// not available; an empty repository simply yields an empty list.
pub fn list_remotes(runner: &impl CommandRunner) -> Result<Vec<String>> {
    runner.run("git", &["remote"])
}

/// Resolve the address configured for the remote `name`.
///
/// Takes the first line of output when git prints several (push URLs etc.).
pub fn remote_address(runner: &impl CommandRunner, name: &str) -> Result<String> {
    let lines = runner.run("git", &["remote", "get-url", name])?;
    lines.into_iter().next().ok_or_else(|| Error::CommandExit {
        command: format!("git remote get-url {name}"),
        stderr: format!("remote '{name}' has no configured address"),
    })
}
