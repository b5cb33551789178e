//! git integration tests.
//!
//! Runs the executor against real temporary repositories.

#[macro_use]
#[path = "common/mod.rs"]
mod common;

use chrono::NaiveDate;
use common::TestRepo;
use relog::engine::{PackageAttributor, list_commits};
use relog::git::{GitError, GitExecutor, VersionControl};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn executor(repo: &TestRepo) -> GitExecutor {
    GitExecutor::with_repo_path(repo.path())
}

#[test]
fn test_list_commits_newest_first_with_refs() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    let first = repo.commit_file("a.txt", "First change", "2024-01-05");
    repo.tag("v0.2.0");
    let second = repo.commit_file("b.txt", "Second change", "2024-01-09");

    let entries = executor(&repo).list_commits("v0.1.0", None).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].sha, second);
    assert_eq!(entries[0].summary, "Second change");
    assert_eq!(entries[0].date, date("2024-01-09"));
    assert!(entries[0].tags.is_empty());
    assert_eq!(entries[0].branches, vec!["main"]);
    assert_eq!(entries[1].sha, first);
    assert_eq!(entries[1].tags, vec!["v0.2.0"]);
    assert_eq!(entries[1].date, date("2024-01-05"));
}

#[test]
fn test_list_commits_with_upper_bound() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    let first = repo.commit_file("a.txt", "First change", "2024-01-05");
    repo.tag("v0.2.0");
    repo.commit_file("b.txt", "Second change", "2024-01-09");

    let entries = executor(&repo).list_commits("v0.1.0", Some("v0.2.0")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].sha, first);
}

#[test]
fn test_engine_keeps_only_tag_refs() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    repo.commit_file("a.txt", "Release", "2024-01-05");
    repo.tag("v1.0.0");
    repo.tag("latest");
    repo.git(&["branch", "release-branch"]);

    let commits = list_commits(&executor(&repo), "v0.1.0", None).unwrap();
    assert_eq!(commits.len(), 1);

    let mut tags = commits[0].tags.clone();
    tags.sort();
    assert_eq!(tags, vec!["latest", "v1.0.0"]);
}

#[test]
fn test_branch_sharing_a_tag_name_is_not_a_tag() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    let released = repo.commit_file("a.txt", "Release", "2024-01-05");
    repo.tag("v1.0.0");
    repo.tag("latest");
    let head = repo.commit_file("b.txt", "After release", "2024-01-09");
    repo.git(&["branch", "latest"]);

    let commits = list_commits(&executor(&repo), "v0.1.0", None).unwrap();
    assert_eq!(commits[0].sha, head);
    assert!(commits[0].tags.is_empty(), "branch became a tag: {:?}", commits[0].tags);
    assert_eq!(commits[1].sha, released);
    let mut tags = commits[1].tags.clone();
    tags.sort();
    assert_eq!(tags, vec!["latest", "v1.0.0"]);

    let buckets = relog::engine::bucket_by_tag_on(&commits, date("2024-02-01"));
    let latest = buckets
        .iter()
        .find(|b| b.key == relog::model::BucketKey::tag("latest"))
        .unwrap();
    assert_eq!(latest.date, date("2024-01-05"));
    assert_eq!(latest.shas(), vec![released.as_str()]);
}

#[test]
fn test_list_tag_names() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    repo.tag("v0.2.0");

    let tags = executor(&repo).list_tag_names().unwrap();
    assert_eq!(tags, vec!["v0.1.0", "v0.2.0"]);
}

#[test]
fn test_last_tag() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.tag("v0.1.0");
    repo.commit_file("a.txt", "Next", "2024-01-02");
    repo.tag("v0.2.0");
    repo.commit_file("b.txt", "Untagged", "2024-01-03");

    assert_eq!(executor(&repo).last_tag().unwrap(), "v0.2.0");
}

#[test]
fn test_last_tag_without_tags() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");

    let err = executor(&repo).last_tag().unwrap_err();
    assert!(matches!(err, GitError::NoTags), "unexpected error: {:?}", err);
}

#[test]
fn test_changed_paths() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.write_file("packages/core/src/lib.rs", "lib");
    repo.write_file("packages/cli/main.rs", "main");
    let sha = repo.commit_on("Touch two packages", "2024-01-02");

    let mut paths = executor(&repo).changed_paths(&sha).unwrap();
    paths.sort();
    assert_eq!(paths, vec!["packages/cli/main.rs", "packages/core/src/lib.rs"]);
}

#[test]
fn test_changed_paths_of_merge_commit() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.commit_file("README.md", "Initial", "2024-01-01");
    repo.git(&["checkout", "-q", "-b", "feature"]);
    repo.commit_file("packages/web/index.js", "Add web", "2024-01-02");
    repo.git(&["checkout", "-q", "main"]);
    let merge = repo.merge_on("feature", "Merge pull request #7 from alice/feature", "2024-01-03");

    let executor = executor(&repo);
    assert_eq!(
        executor.changed_paths(&merge).unwrap(),
        vec!["packages/web/index.js"]
    );

    let attributor = PackageAttributor::new(&executor);
    assert_eq!(attributor.unique_packages_of(&merge).unwrap(), vec!["web"]);
}

#[test]
fn test_not_a_repository() {
    skip_if_no_git!();
    let dir = tempfile::tempdir().unwrap();
    let executor = GitExecutor::with_repo_path(dir.path().to_path_buf());

    let err = executor.list_tag_names().unwrap_err();
    assert!(matches!(err, GitError::NotARepository), "unexpected error: {:?}", err);
}

#[test]
fn test_toplevel_from_subdirectory() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    repo.write_file("packages/core/README.md", "core");

    let executor = GitExecutor::with_repo_path(repo.path().join("packages/core"));
    let toplevel = executor.toplevel().unwrap();
    assert_eq!(
        toplevel.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_remote_url() {
    skip_if_no_git!();
    let repo = TestRepo::new();
    let executor = executor(&repo);
    assert_eq!(executor.remote_url().unwrap(), None);

    repo.add_remote("origin", "git@github.com:owner/project.git");
    assert_eq!(
        executor.remote_url().unwrap().as_deref(),
        Some("git@github.com:owner/project.git")
    );
    assert_eq!(
        relog::github::parse_github_url("git@github.com:owner/project.git").as_deref(),
        Some("owner/project")
    );
}
