//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.
//! Everything the changelog needs from version control goes through the
//! [`VersionControl`] trait so the engine can run against in-memory fakes.

pub mod constants;
mod executor;
mod format;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;
pub use parser::LogEntry;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("No tags found in repository")]
    NoTags,
}

/// Read-only view of a repository's history.
pub trait VersionControl {
    /// Paths changed by a commit (first-parent diff for merges)
    fn changed_paths(&self, sha: &str) -> Result<Vec<String>, GitError>;

    /// All tag names in the repository
    fn list_tag_names(&self) -> Result<Vec<String>, GitError>;

    /// Commits in `from..to` (`to` defaults to `HEAD`), newest first
    fn list_commits(&self, from: &str, to: Option<&str>) -> Result<Vec<LogEntry>, GitError>;

    /// The most recent tag reachable from `HEAD`
    fn last_tag(&self) -> Result<String, GitError>;
}
