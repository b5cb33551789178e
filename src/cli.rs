//! Command-line interface definitions

use std::path::PathBuf;

use clap::Parser;

use crate::changelog::RangeOptions;
use crate::config::ConfigFile;

/// Generate a release changelog from git history and GitHub labels
#[derive(Parser, Debug)]
#[command(name = "relog", version, about, long_about = None)]
pub struct Cli {
    /// Tag to start after (defaults to the latest tag)
    #[arg(long, visible_alias = "from")]
    pub tag_from: Option<String>,

    /// Tag or revision to end at (defaults to HEAD)
    #[arg(long, visible_alias = "to")]
    pub tag_to: Option<String>,

    /// Heading for unreleased changes
    #[arg(long)]
    pub next_version: Option<String>,

    /// GitHub repository as owner/name
    #[arg(long, env = "RELOG_REPO")]
    pub repo: Option<String>,

    /// Path inside the repository
    #[arg(long, default_value = ".")]
    pub repo_path: PathBuf,
}

impl Cli {
    /// Commit range selected on the command line
    pub fn range(&self) -> RangeOptions {
        RangeOptions {
            tag_from: self.tag_from.clone(),
            tag_to: self.tag_to.clone(),
        }
    }

    /// Let command-line flags win over the configuration file
    pub fn apply_overrides(&self, file: &mut ConfigFile) {
        if let Some(repo) = &self.repo {
            file.repo = Some(repo.clone());
        }
        if let Some(version) = &self.next_version {
            file.next_version = Some(version.clone());
        }
    }
}
