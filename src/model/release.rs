//! Release bucket data model

use std::fmt;

use chrono::NaiveDate;

use super::{CategorySection, Commit};

/// Key of the bucket holding commits newer than every tag
pub const UNRELEASED_KEY: &str = "___unreleased___";

/// Grouping key of a release bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketKey {
    /// Commits not yet covered by any tag
    Unreleased,
    Tag(String),
}

impl BucketKey {
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub fn is_unreleased(&self) -> bool {
        matches!(self, Self::Unreleased)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreleased => f.write_str(UNRELEASED_KEY),
            Self::Tag(name) => f.write_str(name),
        }
    }
}

/// Commits attributed to one release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBucket {
    pub key: BucketKey,
    /// Date of the first commit seen for a tag; "today" for unreleased
    pub date: NaiveDate,
    /// Commits in walk order
    pub commits: Vec<Commit>,
}

impl ReleaseBucket {
    pub fn new(key: BucketKey, date: NaiveDate) -> Self {
        Self {
            key,
            date,
            commits: Vec::new(),
        }
    }

    /// Commit hashes in bucket order
    pub fn shas(&self) -> Vec<&str> {
        self.commits.iter().map(|c| c.sha.as_str()).collect()
    }
}

/// A fully processed release, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub key: BucketKey,
    pub date: NaiveDate,
    /// Heading shown for the release (tag name, next version or "Unreleased")
    pub title: String,
    /// Non-empty categories in configuration order
    pub sections: Vec<CategorySection>,
    /// Formatted committer entries, sorted
    pub committers: Vec<String>,
}

impl Release {
    /// True when no configured category matched any commit
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
