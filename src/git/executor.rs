//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::constants::{self, commands, errors, flags, special};
use super::format::Formats;
use super::parser::{LogEntry, Parser};
use super::{GitError, VersionControl};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);

        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }

        cmd.args(args);
        debug!(?args, "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }
            if stderr.contains(errors::NO_NAMES) {
                return Err(GitError::NoTags);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git log` over `from..to` with the parseable format
    pub fn log_raw(&self, from: &str, to: Option<&str>) -> Result<String, GitError> {
        let range = format!("{}..{}", from, to.unwrap_or(special::HEAD));
        self.run(&[commands::LOG, Formats::log(), flags::DATE_SHORT, &range])
    }

    /// Run `git show` listing the files a commit touched
    pub fn show_names_raw(&self, sha: &str) -> Result<String, GitError> {
        self.run(&[
            commands::SHOW,
            flags::MERGES_SPLIT,
            flags::NAME_ONLY,
            flags::EMPTY_PRETTY,
            flags::FIRST_PARENT,
            sha,
        ])
    }

    /// Root directory of the working tree
    pub fn toplevel(&self) -> Result<PathBuf, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::SHOW_TOPLEVEL])?;
        Ok(PathBuf::from(output.trim()))
    }

    /// URL of the `origin` remote, if one is configured
    pub fn remote_url(&self) -> Result<Option<String>, GitError> {
        match self.run(&[commands::CONFIG, flags::GET, special::ORIGIN_URL_KEY]) {
            Ok(output) => {
                let url = output.trim();
                Ok((!url.is_empty()).then(|| url.to_string()))
            }
            // `git config --get` exits 1 when the key is unset
            Err(GitError::CommandFailed { exit_code: 1, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl VersionControl for GitExecutor {
    fn changed_paths(&self, sha: &str) -> Result<Vec<String>, GitError> {
        let output = self.show_names_raw(sha)?;
        Ok(Parser::parse_name_only(&output))
    }

    fn list_tag_names(&self) -> Result<Vec<String>, GitError> {
        let output = self.run(&[commands::TAG])?;
        Ok(Parser::parse_tag_list(&output))
    }

    fn list_commits(&self, from: &str, to: Option<&str>) -> Result<Vec<LogEntry>, GitError> {
        let output = self.log_raw(from, to)?;
        Parser::parse_log(&output)
    }

    fn last_tag(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::DESCRIBE, flags::ABBREV_ZERO, flags::TAGS])?;
        let tag = output.trim();
        if tag.is_empty() {
            return Err(GitError::NoTags);
        }
        Ok(tag.to_string())
    }
}
