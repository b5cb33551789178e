//! GitHub access layer
//!
//! Fetches issue/pull request metadata and user profiles. The engine only
//! sees the [`RemoteRepository`] trait.

mod cache;
mod client;
mod types;

pub use cache::ResponseCache;
pub use client::{GitHubClient, parse_github_url};
pub use types::{IssueData, IssueLabel, IssuePullRequest, IssueUser, UserData};

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to GitHub
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("Failed to parse GitHub response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response cache error at {}: {source}", path.display())]
    Cache {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Remote repository hosting issues, pull requests and user profiles
#[async_trait]
pub trait RemoteRepository: Send + Sync {
    /// Issue or pull request by number
    async fn issue_data(&self, number: u64) -> Result<IssueData, GitHubError>;

    /// Public profile of a user
    async fn user_data(&self, login: &str) -> Result<UserData, GitHubError>;

    /// URL prefix that an issue number is appended to
    fn base_issue_url(&self) -> String;
}
