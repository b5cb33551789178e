//! Data models for relog
//!
//! This module contains the structures flowing through the changelog
//! engine: commits, release buckets, categories and package groups.

mod category;
mod commit;
mod release;

pub use category::{Category, CategorySection, OTHER_GROUP, PackageGroup};
pub use commit::{Author, Commit, Enrichment, IssueDetails, PullRequestRef};
pub use release::{BucketKey, Release, ReleaseBucket, UNRELEASED_KEY};
