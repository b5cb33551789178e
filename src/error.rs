//! Top-level error type
//!
//! Every failure is fatal for a run. Collaborator errors pass through with
//! their original message.

use thiserror::Error;

use crate::config::ConfigError;
use crate::git::GitError;
use crate::github::GitHubError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, Error>;
