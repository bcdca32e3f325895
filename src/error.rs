use std::io;
use thiserror::Error;

/// Result type for the gitweb pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run.
///
/// Only the selector's invalid-input case is recoverable, and it is handled
/// inside the prompt loop rather than surfaced here.
#[derive(Debug, Error)]
pub enum Error {
    /// The external program could not be started at all.
    #[error("failed to start `{command}`: {source}")]
    CommandStart {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The external program ran but exited with a failure status.
    #[error("`{command}` failed: {stderr}")]
    CommandExit { command: String, stderr: String },

    /// A remote address did not match the accepted grammar.
    #[error("invalid git address: {address}")]
    InvalidAddress { address: String },

    /// Zero remotes are configured for the repository.
    #[error("no remote is found")]
    NoRemotes,

    /// Reading the choice from stdin or writing the prompt failed.
    #[error("terminal i/o failed: {0}")]
    Terminal(#[source] io::Error),
}
