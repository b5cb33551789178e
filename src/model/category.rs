//! Category and package group data models

use super::Commit;

/// Heading of the group for commits touching no package
pub const OTHER_GROUP: &str = "Other";

/// Commits of one bucket carrying a configured label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Configured label key
    pub label: String,
    /// Configured display heading
    pub heading: String,
    /// Matching commits in bucket order (may be empty)
    pub commits: Vec<Commit>,
}

impl Category {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Commits of a category touching the same set of packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    /// Sorted, backtick-quoted package list, or [`OTHER_GROUP`]
    pub heading: String,
    /// Commits in category order, titles normalized
    pub commits: Vec<Commit>,
}

/// A non-empty category split into package groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub heading: String,
    /// Groups in order of first appearance
    pub groups: Vec<PackageGroup>,
    /// The only group is [`OTHER_GROUP`]; its sub-heading is redundant
    pub single_implicit_group: bool,
}

impl CategorySection {
    /// Total number of commits across groups
    pub fn commit_count(&self) -> usize {
        self.groups.iter().map(|g| g.commits.len()).sum()
    }
}
