//! Package attribution
//!
//! A package is a directory directly under [`PACKAGES_PREFIX`]; a commit
//! belongs to every package it changed a file in.

use crate::git::constants::PACKAGES_PREFIX;
use crate::git::{GitError, VersionControl};
use crate::model::OTHER_GROUP;

/// Maps commits to the packages they touched
pub struct PackageAttributor<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
}

impl<'a, V: VersionControl + ?Sized> PackageAttributor<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Distinct package names changed by `sha`, in first-seen order
    pub fn unique_packages_of(&self, sha: &str) -> Result<Vec<String>, GitError> {
        let paths = self.vcs.changed_paths(sha)?;
        Ok(packages_in_paths(paths.iter().map(String::as_str)))
    }
}

/// Package name of a path, if it lives under [`PACKAGES_PREFIX`]
pub fn package_of(path: &str) -> Option<&str> {
    path.strip_prefix(PACKAGES_PREFIX)?
        .split('/')
        .next()
        .filter(|name| !name.is_empty())
}

/// Distinct package names of `paths`, in first-seen order
pub fn packages_in_paths<'p>(paths: impl IntoIterator<Item = &'p str>) -> Vec<String> {
    let mut packages: Vec<String> = Vec::new();
    for name in paths.into_iter().filter_map(package_of) {
        if !packages.iter().any(|p| p == name) {
            packages.push(name.to_string());
        }
    }
    packages
}

/// Group heading for a package set
///
/// Sorted, backtick-quoted and comma-joined, or [`OTHER_GROUP`] when empty.
pub fn package_heading(packages: &[String]) -> String {
    if packages.is_empty() {
        return OTHER_GROUP.to_string();
    }
    let mut sorted: Vec<&str> = packages.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|p| format!("`{}`", p))
        .collect::<Vec<_>>()
        .join(", ")
}
