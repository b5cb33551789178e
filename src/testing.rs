//! In-memory collaborators for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::git::parser::Parser;
use crate::git::{GitError, LogEntry, VersionControl};
use crate::github::{
    GitHubError, IssueData, IssueLabel, IssuePullRequest, IssueUser, RemoteRepository, UserData,
};
use crate::model::{Commit, Enrichment, IssueDetails};

pub const BASE_ISSUE_URL: &str = "https://github.com/o/r/issues/";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Bare commit dated 2024-01-01
pub fn commit(sha: &str, tags: &[&str]) -> Commit {
    Commit::new(
        sha,
        format!("commit {}", sha),
        date("2024-01-01"),
        tags.iter().map(|t| t.to_string()).collect(),
    )
}

/// Enriched commit with labels and an author
pub fn labeled(sha: &str, labels: &[&str], login: Option<&str>) -> Commit {
    let details = IssueDetails {
        number: Some(1),
        title: Some(format!("Title {}", sha)),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        pull_request: None,
        author: login.map(|login| crate::model::Author {
            login: login.to_string(),
            html_url: format!("https://github.com/{}", login),
        }),
    };
    Commit {
        enrichment: Enrichment::Enriched(details),
        ..commit(sha, &[])
    }
}

/// Version control backed by maps
#[derive(Default)]
pub struct FakeVcs {
    paths: HashMap<String, Vec<String>>,
    tags: Vec<String>,
    log: Vec<LogEntry>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, sha: &str, paths: &[&str]) -> Self {
        self.paths
            .insert(sha.to_string(), paths.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Append a log entry with `%D`-style decorations (call newest first)
    pub fn with_entry(mut self, sha: &str, decorations: &str, summary: &str, day: &str) -> Self {
        let (tags, branches) = Parser::parse_decorations(decorations);
        self.log.push(LogEntry {
            sha: sha.to_string(),
            tags,
            branches,
            summary: summary.to_string(),
            date: date(day),
        });
        self.paths.entry(sha.to_string()).or_default();
        self
    }
}

impl VersionControl for FakeVcs {
    fn changed_paths(&self, sha: &str) -> Result<Vec<String>, GitError> {
        self.paths.get(sha).cloned().ok_or(GitError::CommandFailed {
            stderr: format!("fatal: bad object {}", sha),
            exit_code: 128,
        })
    }

    fn list_tag_names(&self) -> Result<Vec<String>, GitError> {
        Ok(self.tags.clone())
    }

    fn list_commits(&self, _from: &str, _to: Option<&str>) -> Result<Vec<LogEntry>, GitError> {
        Ok(self.log.clone())
    }

    fn last_tag(&self) -> Result<String, GitError> {
        self.tags.last().cloned().ok_or(GitError::NoTags)
    }
}

/// Remote repository backed by maps, recording user lookups
#[derive(Default)]
pub struct FakeRemote {
    issues: HashMap<u64, IssueData>,
    users: HashMap<String, UserData>,
    pub user_lookups: Mutex<Vec<String>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, number: u64, title: &str, labels: &[&str], login: &str) -> Self {
        self.issues.insert(
            number,
            IssueData {
                number: Some(number),
                title: Some(title.to_string()),
                pull_request: Some(IssuePullRequest {
                    html_url: format!("https://github.com/o/r/pull/{}", number),
                }),
                user: Some(IssueUser {
                    login: login.to_string(),
                    html_url: format!("https://github.com/{}", login),
                }),
                labels: labels
                    .iter()
                    .map(|l| IssueLabel {
                        name: l.to_string(),
                    })
                    .collect(),
            },
        );
        self
    }

    pub fn with_user(mut self, login: &str, name: Option<&str>) -> Self {
        self.users.insert(
            login.to_string(),
            UserData {
                login: login.to_string(),
                name: name.map(str::to_string),
                html_url: format!("https://github.com/{}", login),
            },
        );
        self
    }
}

#[async_trait]
impl RemoteRepository for FakeRemote {
    async fn issue_data(&self, number: u64) -> Result<IssueData, GitHubError> {
        self.issues.get(&number).cloned().ok_or(GitHubError::Api {
            status: 404,
            message: "Not Found".to_string(),
        })
    }

    async fn user_data(&self, login: &str) -> Result<UserData, GitHubError> {
        self.user_lookups.lock().unwrap().push(login.to_string());
        self.users.get(login).cloned().ok_or(GitHubError::Api {
            status: 404,
            message: "Not Found".to_string(),
        })
    }

    fn base_issue_url(&self) -> String {
        BASE_ISSUE_URL.to_string()
    }
}
