//! Commit data model
//!
//! A commit starts out [`Enrichment::Bare`] when read from git and becomes
//! [`Enrichment::Enriched`] once its pull request or issue has been fetched.

use chrono::NaiveDate;

use crate::github::IssueData;

/// Author of a pull request, as known to the remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Account name (deduplication key)
    pub login: String,
    /// Profile page URL
    pub html_url: String,
}

/// Link to the pull request behind a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub number: u64,
    pub html_url: String,
}

/// Data merged in from the remote issue/pull request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueDetails {
    /// Issue number, when the remote reported one
    pub number: Option<u64>,
    /// Issue or pull request title
    pub title: Option<String>,
    /// Label names
    pub labels: Vec<String>,
    pub pull_request: Option<PullRequestRef>,
    pub author: Option<Author>,
}

/// Whether remote metadata has been merged into a commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Enrichment {
    /// No issue reference, or not yet looked up
    #[default]
    Bare,
    Enriched(IssueDetails),
}

/// A commit within the changelog range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash
    pub sha: String,
    /// Subject line from git
    pub summary: String,
    /// Author date
    pub date: NaiveDate,
    /// Tags pointing directly at this commit
    pub tags: Vec<String>,
    pub enrichment: Enrichment,
}

impl Commit {
    /// Create a bare commit
    pub fn new(
        sha: impl Into<String>,
        summary: impl Into<String>,
        date: NaiveDate,
        tags: Vec<String>,
    ) -> Self {
        Self {
            sha: sha.into(),
            summary: summary.into(),
            date,
            tags,
            enrichment: Enrichment::Bare,
        }
    }

    /// Merge a remote issue response into this commit
    ///
    /// Every field of the response is optional and maps onto an optional
    /// field here, so the merge never fails.
    pub fn enrich(self, issue: IssueData) -> Self {
        let author = issue.user.map(|user| Author {
            login: user.login,
            html_url: user.html_url,
        });
        let pull_request = match (issue.number, issue.pull_request) {
            (Some(number), Some(pr)) => Some(PullRequestRef {
                number,
                html_url: pr.html_url,
            }),
            _ => None,
        };

        Self {
            enrichment: Enrichment::Enriched(IssueDetails {
                number: issue.number,
                title: issue.title,
                labels: issue.labels.into_iter().map(|label| label.name).collect(),
                pull_request,
                author,
            }),
            ..self
        }
    }

    /// Remote details, if this commit was enriched
    pub fn details(&self) -> Option<&IssueDetails> {
        match &self.enrichment {
            Enrichment::Bare => None,
            Enrichment::Enriched(details) => Some(details),
        }
    }

    /// Remote title (only present after enrichment)
    pub fn title(&self) -> Option<&str> {
        self.details().and_then(|d| d.title.as_deref())
    }

    /// Title if known, otherwise the git subject
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or(&self.summary)
    }

    /// Label names (empty for bare commits)
    pub fn labels(&self) -> &[String] {
        self.details().map(|d| d.labels.as_slice()).unwrap_or(&[])
    }

    pub fn author(&self) -> Option<&Author> {
        self.details().and_then(|d| d.author.as_ref())
    }

    pub fn pull_request(&self) -> Option<&PullRequestRef> {
        self.details().and_then(|d| d.pull_request.as_ref())
    }

    /// Issue number from the remote
    pub fn issue_number(&self) -> Option<u64> {
        self.details().and_then(|d| d.number)
    }

    /// Copy of this commit with its title replaced
    pub(crate) fn with_title(&self, title: String) -> Self {
        let mut commit = self.clone();
        if let Enrichment::Enriched(details) = &mut commit.enrichment {
            details.title = Some(title);
        }
        commit
    }
}
