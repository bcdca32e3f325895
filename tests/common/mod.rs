//! Common test utilities for gitweb integration tests.

use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Get path to the compiled binary (built by cargo test).
pub fn gitweb_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gitweb")
}

/// A temporary git repository to run the binary in.
pub struct TestRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create a fresh repository with no remotes configured.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Self { dir };
        repo.git(&["init", "-b", "main"]);
        repo.git(&["config", "user.email", "test@test.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }

    /// Run the gitweb binary inside this repository with stdin closed.
    pub fn gitweb(&self) -> Output {
        Command::new(gitweb_bin())
            .current_dir(self.dir.path())
            .stdin(Stdio::null())
            .output()
            .expect("failed to execute gitweb")
    }

    fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("failed to run git");
        assert!(output.status.success(), "git {args:?} failed");
    }
}
