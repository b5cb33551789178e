//! Category classification and package grouping
//!
//! Commits are matched to configured labels case-insensitively. Commits with
//! no configured label are left out of every category.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::packages::{PackageAttributor, package_heading};
use crate::config::LabelMap;
use crate::git::{GitError, VersionControl};
use crate::model::{Category, CategorySection, Commit, OTHER_GROUP, PackageGroup};

/// "fixes #12", "Closed T7", "resolve #3" and friends
///
/// Case-insensitive throughout. `fix` takes `e`/`ed`/`es`, `close` and
/// `resolve` take `s`/`d`; the number needs a `#` or `T` prefix.
static CLOSES_ISSUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:fix(?:e|ed|es)?|close(?:s|d)?|resolve(?:s|d)?)\s+[#t](\d+)\b")
        .expect("Invalid closes-issue regex")
});

/// Group a bucket's commits under each configured label
///
/// Returns one category per label in configuration order, including labels
/// no commit carries.
pub fn classify(commits: &[Commit], labels: &LabelMap) -> Vec<Category> {
    labels
        .iter()
        .map(|(label, heading)| Category {
            label: label.to_string(),
            heading: heading.to_string(),
            commits: commits
                .iter()
                .filter(|commit| has_label(commit, label))
                .cloned()
                .collect(),
        })
        .collect()
}

fn has_label(commit: &Commit, label: &str) -> bool {
    commit
        .labels()
        .iter()
        .any(|name| name.to_lowercase() == label.to_lowercase())
}

/// Rewrite "fixes #12" style references into an issue link
///
/// Produces `Closes [#12](<base_issue_url>12)`. The rewritten text contains
/// no match (`[` follows the verb), and a reference that is already the
/// label of a markdown link is left as is, so applying this twice is the
/// same as applying it once.
pub fn normalize_title<'t>(title: &'t str, base_issue_url: &str) -> Cow<'t, str> {
    CLOSES_ISSUE_REGEX.replace_all(title, |caps: &Captures| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let end = caps.get(0).map_or(0, |m| m.end());
        if title[end..].starts_with("](") {
            return whole.to_string();
        }
        let number = &caps[1];
        format!("Closes [#{}]({}{})", number, base_issue_url, number)
    })
}

/// Split a category into package groups, normalizing titles
///
/// Groups appear in the order their first commit appears in the category.
pub fn group_by_package<V: VersionControl + ?Sized>(
    category: &Category,
    attributor: &PackageAttributor<'_, V>,
    base_issue_url: &str,
) -> Result<CategorySection, GitError> {
    let mut groups: Vec<PackageGroup> = Vec::new();

    for commit in &category.commits {
        let heading = package_heading(&attributor.unique_packages_of(&commit.sha)?);
        let commit = match commit.title() {
            Some(title) => commit.with_title(normalize_title(title, base_issue_url).into_owned()),
            None => commit.clone(),
        };

        match groups.iter_mut().find(|g| g.heading == heading) {
            Some(group) => group.commits.push(commit),
            None => groups.push(PackageGroup {
                heading,
                commits: vec![commit],
            }),
        }
    }

    let single_implicit_group = groups.len() == 1 && groups[0].heading == OTHER_GROUP;
    Ok(CategorySection {
        heading: category.heading.clone(),
        groups,
        single_implicit_group,
    })
}
