//! Changelog configuration
//!
//! Read from the `"changelog"` key of `lerna.json` or `package.json` at the
//! repository root:
//!
//! ```json
//! {
//!   "changelog": {
//!     "repo": "owner/name",
//!     "labels": { "enhancement": ":rocket: Enhancement", "bug": ":bug: Bug Fix" },
//!     "ignoreCommitters": ["dependabot", "bot"],
//!     "cacheDir": ".changelog"
//!   }
//! }
//! ```
//!
//! The order of `labels` is the order categories appear in the changelog.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Files searched for a `"changelog"` key, in order
pub const CONFIG_FILES: [&str; 2] = ["lerna.json", "package.json"];

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No \"changelog\" configuration found in lerna.json or package.json under {}", dir.display())]
    NotFound { dir: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Missing \"labels\" in changelog configuration")]
    MissingLabels,

    #[error("Missing \"repo\" in changelog configuration and no GitHub origin remote to infer it from")]
    MissingRepo,

    #[error("Invalid repo {0:?}: expected \"owner/name\"")]
    InvalidRepo(String),
}

/// Ordered mapping from label name to category heading
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap(Vec<(String, String)>);

impl LabelMap {
    /// `(label, heading)` pairs in configuration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(l, h)| (l.as_str(), h.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, H: Into<String>> FromIterator<(L, H)> for LabelMap {
    fn from_iter<I: IntoIterator<Item = (L, H)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(l, h)| (l.into(), h.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for LabelMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelMapVisitor;

        impl<'de> Visitor<'de> for LabelMapVisitor {
            type Value = LabelMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping label names to headings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LabelMap, A::Error> {
                let mut entries: Vec<(String, String)> = Vec::new();
                while let Some((label, heading)) = map.next_entry::<String, String>()? {
                    // A repeated key keeps its first position and its last heading
                    match entries.iter_mut().find(|(l, _)| *l == label) {
                        Some(entry) => entry.1 = heading,
                        None => entries.push((label, heading)),
                    }
                }
                Ok(LabelMap(entries))
            }
        }

        deserializer.deserialize_map(LabelMapVisitor)
    }
}

/// The `"changelog"` object as written on disk
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub repo: Option<String>,
    pub labels: Option<LabelMap>,
    pub ignore_committers: Option<Vec<String>>,
    pub cache_dir: Option<PathBuf>,
    pub next_version: Option<String>,
}

impl ConfigFile {
    /// Find and parse the configuration under `root`
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        for name in CONFIG_FILES {
            let path = root.join(name);
            if !path.exists() {
                continue;
            }
            if let Some(file) = Self::read(&path)? {
                return Ok(file);
            }
        }
        Err(ConfigError::NotFound {
            dir: root.to_path_buf(),
        })
    }

    /// Parse one file; `None` when it has no `"changelog"` key
    fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the text of a whole `lerna.json`/`package.json`
    pub fn parse(text: &str) -> Result<Option<Self>, serde_json::Error> {
        #[derive(Deserialize)]
        struct Wrapper {
            changelog: Option<ConfigFile>,
        }
        let wrapper: Wrapper = serde_json::from_str(text)?;
        Ok(wrapper.changelog)
    }

    /// Validate and fill in defaults
    ///
    /// `fallback_repo` is used when the file names no repository.
    pub fn into_config(self, fallback_repo: Option<String>) -> Result<Config, ConfigError> {
        let labels = self
            .labels
            .filter(|labels| !labels.is_empty())
            .ok_or(ConfigError::MissingLabels)?;

        let repo = self
            .repo
            .or(fallback_repo)
            .ok_or(ConfigError::MissingRepo)?;
        validate_repo(&repo)?;

        Ok(Config {
            repo,
            labels,
            // An empty token would match every login
            ignore_committers: self
                .ignore_committers
                .unwrap_or_default()
                .into_iter()
                .filter(|token| !token.is_empty())
                .collect(),
            cache_dir: self.cache_dir,
            next_version: self.next_version,
        })
    }
}

fn validate_repo(repo: &str) -> Result<(), ConfigError> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(ConfigError::InvalidRepo(repo.to_string())),
    }
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// GitHub repository, `owner/name`
    pub repo: String,
    pub labels: LabelMap,
    /// Logins containing any of these tokens are left out of committer lists
    pub ignore_committers: Vec<String>,
    /// Directory for cached GitHub responses
    pub cache_dir: Option<PathBuf>,
    /// Heading used for unreleased commits
    pub next_version: Option<String>,
}

impl Config {
    pub fn new(repo: impl Into<String>, labels: LabelMap) -> Self {
        Self {
            repo: repo.into(),
            labels,
            ignore_committers: Vec::new(),
            cache_dir: None,
            next_version: None,
        }
    }
}
