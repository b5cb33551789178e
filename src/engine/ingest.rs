//! Commit ingestion and enrichment
//!
//! Reads the commit range from git, then looks up the pull request or issue
//! referenced by each commit subject.

use std::collections::HashSet;
use std::sync::LazyLock;

use futures::{StreamExt, TryStreamExt, stream};
use regex::Regex;
use tracing::{debug, info};

use crate::git::{GitError, VersionControl};
use crate::github::{GitHubError, RemoteRepository};
use crate::model::Commit;

/// Maximum number of issue lookups in flight at once
pub const MAX_CONCURRENT_LOOKUPS: usize = 5;

/// "Merge pull request #123 from user/branch"
static MERGE_COMMIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Merge pull request #(\d+) from ").expect("Invalid merge commit regex")
});

/// "Add feature (#123)" as written by squash merges
static SQUASH_COMMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(\d+)\)\s*$").expect("Invalid squash commit regex"));

/// Issue or pull request number referenced by a commit subject
pub fn issue_reference(summary: &str) -> Option<u64> {
    MERGE_COMMIT_REGEX
        .captures(summary)
        .or_else(|| SQUASH_COMMIT_REGEX.captures(summary))
        .and_then(|caps| caps[1].parse().ok())
}

/// Commits in `from..to`, newest first
///
/// A commit's tags are its `tag: ` decorations that also appear in the
/// repository's tag list. Branch decorations never become tags.
pub fn list_commits<V: VersionControl + ?Sized>(
    vcs: &V,
    from: &str,
    to: Option<&str>,
) -> Result<Vec<Commit>, GitError> {
    let tag_names: HashSet<String> = vcs.list_tag_names()?.into_iter().collect();
    let entries = vcs.list_commits(from, to)?;
    info!(count = entries.len(), from, to = ?to, "listed commits");

    Ok(entries
        .into_iter()
        .map(|entry| {
            let tags = entry
                .tags
                .into_iter()
                .filter(|name| tag_names.contains(name))
                .collect();
            Commit::new(entry.sha, entry.summary, entry.date, tags)
        })
        .collect())
}

/// Merge remote issue data into every commit that references one
///
/// Up to [`MAX_CONCURRENT_LOOKUPS`] requests run at once; the output keeps
/// the input order regardless of completion order.
pub async fn enrich<R: RemoteRepository + ?Sized>(
    remote: &R,
    commits: Vec<Commit>,
) -> Result<Vec<Commit>, GitHubError> {
    stream::iter(commits)
        .map(|commit| async move {
            match issue_reference(&commit.summary) {
                Some(number) => {
                    debug!(number, sha = %commit.sha, "fetching issue");
                    remote
                        .issue_data(number)
                        .await
                        .map(|issue| commit.enrich(issue))
                }
                None => Ok(commit),
            }
        })
        .buffered(MAX_CONCURRENT_LOOKUPS)
        .try_collect()
        .await
}
