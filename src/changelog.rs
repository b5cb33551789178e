//! Changelog generation
//!
//! Ties the engine together: resolve the commit range, ingest and enrich
//! commits, bucket them by tag, then classify and attribute each bucket.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::Config;
use crate::engine::{
    PackageAttributor, aggregate_committers, bucket_by_tag_on, classify, enrich, group_by_package,
    list_commits,
};
use crate::error::Result;
use crate::git::VersionControl;
use crate::github::RemoteRepository;
use crate::model::{BucketKey, Release, ReleaseBucket};
use crate::render;

/// Heading for unreleased commits when no next version is configured
pub const UNRELEASED_TITLE: &str = "Unreleased";

/// Commit range to generate a changelog for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeOptions {
    /// Exclusive lower bound; defaults to the latest tag
    pub tag_from: Option<String>,
    /// Inclusive upper bound; defaults to `HEAD`
    pub tag_to: Option<String>,
}

/// Changelog generator over a repository and its GitHub counterpart
pub struct Changelog<V, R> {
    config: Config,
    vcs: V,
    remote: R,
}

impl<V: VersionControl, R: RemoteRepository> Changelog<V, R> {
    pub fn new(config: Config, vcs: V, remote: R) -> Self {
        Self {
            config,
            vcs,
            remote,
        }
    }

    /// Render the changelog for a range as markdown
    pub async fn create_markdown(&self, range: &RangeOptions) -> Result<String> {
        let releases = self.releases(range).await?;
        Ok(render::render_markdown(
            &releases,
            &self.remote.base_issue_url(),
        ))
    }

    /// Build releases for a range, dating unreleased work today
    pub async fn releases(&self, range: &RangeOptions) -> Result<Vec<Release>> {
        self.releases_on(range, Local::now().date_naive()).await
    }

    /// Build releases for a range
    ///
    /// Releases keep bucket order; releases where no configured label
    /// matched are kept with no sections.
    pub async fn releases_on(&self, range: &RangeOptions, today: NaiveDate) -> Result<Vec<Release>> {
        let from = match &range.tag_from {
            Some(tag) => tag.clone(),
            None => self.vcs.last_tag()?,
        };
        info!(%from, to = ?range.tag_to, "generating changelog");

        let commits = list_commits(&self.vcs, &from, range.tag_to.as_deref())?;
        let commits = enrich(&self.remote, commits).await?;
        let buckets = bucket_by_tag_on(&commits, today);

        let mut releases = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            releases.push(self.release(bucket).await?);
        }
        Ok(releases)
    }

    /// Classify, group and attribute one bucket
    async fn release(&self, bucket: ReleaseBucket) -> Result<Release> {
        debug!(key = %bucket.key, commits = bucket.commits.len(), "processing release");

        let attributor = PackageAttributor::new(&self.vcs);
        let base_issue_url = self.remote.base_issue_url();

        let sections = classify(&bucket.commits, &self.config.labels)
            .iter()
            .filter(|category| !category.is_empty())
            .map(|category| group_by_package(category, &attributor, &base_issue_url))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let committers = aggregate_committers(
            &bucket.commits,
            &self.config.ignore_committers,
            &self.remote,
        )
        .await?;

        Ok(Release {
            title: self.release_title(&bucket.key),
            key: bucket.key,
            date: bucket.date,
            sections,
            committers,
        })
    }

    fn release_title(&self, key: &BucketKey) -> String {
        match key {
            BucketKey::Tag(name) => name.clone(),
            BucketKey::Unreleased => self
                .config
                .next_version
                .clone()
                .unwrap_or_else(|| UNRELEASED_TITLE.to_string()),
        }
    }
}
