//! GitHub API response shapes
//!
//! Only the fields the changelog reads are declared; everything else in the
//! payload is ignored.

use serde::Deserialize;

/// `GET /repos/{repo}/issues/{number}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueData {
    pub number: Option<u64>,
    pub title: Option<String>,
    /// Present only when the issue is a pull request
    pub pull_request: Option<IssuePullRequest>,
    pub user: Option<IssueUser>,
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssuePullRequest {
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueUser {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueLabel {
    pub name: String,
}

/// `GET /users/{login}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserData {
    pub login: String,
    pub name: Option<String>,
    pub html_url: String,
}

/// GitHub error body
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    pub message: String,
}
