//! Commit-to-release mapping engine
//!
//! - [`ingest`]: read commits from git and merge in GitHub metadata
//! - [`bucket`]: assign commits to releases by tag
//! - [`classify`]: group a release's commits by label and package
//! - [`committers`]: collect a release's contributors
//! - [`packages`]: find the packages a commit touched

pub mod bucket;
pub mod classify;
pub mod committers;
pub mod ingest;
pub mod packages;

pub use bucket::{bucket_by_tag, bucket_by_tag_on, next_tag_set};
pub use classify::{classify, group_by_package, normalize_title};
pub use committers::{aggregate_committers, format_committer, is_ignored};
pub use ingest::{MAX_CONCURRENT_LOOKUPS, enrich, issue_reference, list_commits};
pub use packages::{PackageAttributor, package_heading, package_of, packages_in_paths};
