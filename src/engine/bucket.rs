//! Tag bucketing
//!
//! Walks the commit list once, carrying the set of tags that currently
//! applies. A commit carrying tags replaces that set before it is placed, so
//! the tagged commit itself belongs to the new tags. A commit under several
//! simultaneous tags is copied into each of their buckets.
//!
//! # Ordering
//!
//! The walk expects git's default log order, newest first. With that order a
//! tag's bucket holds the tagged commit and everything older up to the next
//! tagged commit, and commits newer than every tag land in the unreleased
//! bucket. Feeding the list reversed changes bucket membership.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::model::{BucketKey, Commit, ReleaseBucket};

/// Buckets keyed by tag, in order of first appearance
#[derive(Debug, Default)]
struct Buckets {
    buckets: Vec<ReleaseBucket>,
    index: HashMap<BucketKey, usize>,
}

impl Buckets {
    fn push(&mut self, key: &BucketKey, commit: &Commit, today: NaiveDate) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                let date = match key {
                    BucketKey::Unreleased => today,
                    BucketKey::Tag(_) => commit.date,
                };
                self.buckets.push(ReleaseBucket::new(key.clone(), date));
                self.index.insert(key.clone(), self.buckets.len() - 1);
                self.buckets.len() - 1
            }
        };
        self.buckets[slot].commits.push(commit.clone());
    }
}

/// The tag set in effect at `commit`, given the set before it
///
/// Tags on the commit replace the previous set entirely; otherwise the
/// previous set carries over.
pub fn next_tag_set(previous: Vec<BucketKey>, commit: &Commit) -> Vec<BucketKey> {
    if commit.tags.is_empty() {
        return previous;
    }
    let mut keys: Vec<BucketKey> = Vec::with_capacity(commit.tags.len());
    for tag in &commit.tags {
        let key = BucketKey::tag(tag.as_str());
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Partition commits into release buckets, dating unreleased work today
pub fn bucket_by_tag(commits: &[Commit]) -> Vec<ReleaseBucket> {
    bucket_by_tag_on(commits, Local::now().date_naive())
}

/// Partition commits into release buckets
///
/// The unreleased bucket is dated `today` and only exists if it received a
/// commit. A tag's bucket is dated by the first commit placed in it.
pub fn bucket_by_tag_on(commits: &[Commit], today: NaiveDate) -> Vec<ReleaseBucket> {
    let (_, buckets) = commits.iter().fold(
        (vec![BucketKey::Unreleased], Buckets::default()),
        |(current, mut buckets), commit| {
            let current = next_tag_set(current, commit);
            for key in &current {
                buckets.push(key, commit, today);
            }
            (current, buckets)
        },
    );
    buckets.buckets
}
