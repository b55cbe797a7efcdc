//! Error types for completion generation.

use std::process::ExitStatus;
use thiserror::Error;

/// Failure of the command-execution collaborator.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process could not be started (shell missing, permission denied)
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Why a single listing row could not be read as a tool entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("no columns found")]
    Empty,

    #[error("expected 3 columns (package id, version, commands), found {found}")]
    MissingColumns { found: usize },
}

/// Error returned by the generator.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Execution(#[from] ExecError),

    /// A data row failed the column check under the fail-fast policy
    #[error("malformed listing row {line}: {text:?}")]
    MalformedRow {
        /// 1-based line number in the captured output
        line: usize,
        text: String,
        #[source]
        source: RowParseError,
    },
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
