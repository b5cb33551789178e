//! git output parser
//!
//! Parses the output from git commands into structured data.

use chrono::NaiveDate;

use super::GitError;
use super::constants::special;
use super::format::FIELD_SEPARATOR;

/// One line of `git log` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Full commit hash
    pub sha: String,
    /// Tags pointing at this commit (`tag: ` decorations only)
    pub tags: Vec<String>,
    /// Branches pointing at this commit, local and remote
    pub branches: Vec<String>,
    /// Subject line
    pub summary: String,
    /// Author date
    pub date: NaiveDate,
}

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log` output into a list of entries
    ///
    /// Each non-empty line is one commit with tab-separated fields.
    /// Order is preserved exactly as git printed it (newest first).
    pub fn parse_log(output: &str) -> Result<Vec<LogEntry>, GitError> {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Self::parse_log_record)
            .collect()
    }

    /// Parse a single log record
    ///
    /// Fields: sha, ref names, subject, date. A subject containing tabs is
    /// rejoined since sha, ref names and date never contain one.
    pub fn parse_log_record(record: &str) -> Result<LogEntry, GitError> {
        let mut head = record.splitn(3, FIELD_SEPARATOR);
        let (Some(sha), Some(decorations), Some(rest)) = (head.next(), head.next(), head.next())
        else {
            return Err(GitError::ParseError(format!(
                "Expected 4 tab-separated fields: {:?}",
                record
            )));
        };

        let Some((summary, date)) = rest.rsplit_once(FIELD_SEPARATOR) else {
            return Err(GitError::ParseError(format!(
                "Missing date field: {:?}",
                record
            )));
        };

        let sha = sha.trim();
        if sha.is_empty() {
            return Err(GitError::ParseError(format!(
                "Missing commit hash: {:?}",
                record
            )));
        }

        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
            GitError::ParseError(format!("Invalid date {:?} for {}: {}", date, sha, e))
        })?;

        let (tags, branches) = Self::parse_decorations(decorations);
        Ok(LogEntry {
            sha: sha.to_string(),
            tags,
            branches,
            summary: summary.to_string(),
            date,
        })
    }

    /// Parse a `%D` decoration list into `(tags, branches)`
    ///
    /// `"HEAD -> main, tag: v1.0.0, origin/main"` becomes
    /// `(["v1.0.0"], ["main", "origin/main"])`. Only `tag: ` entries count as
    /// tags, so a branch sharing a tag's name stays a branch.
    pub fn parse_decorations(decorations: &str) -> (Vec<String>, Vec<String>) {
        let mut tags = Vec::new();
        let mut branches = Vec::new();

        for name in decorations.split(", ").map(str::trim) {
            if name.is_empty() || name == special::HEAD {
                continue;
            }
            match name.strip_prefix(special::TAG_DECORATION_PREFIX) {
                Some(tag) => tags.push(tag.to_string()),
                None => {
                    let branch = name
                        .strip_prefix(special::HEAD_DECORATION_PREFIX)
                        .unwrap_or(name);
                    branches.push(branch.to_string());
                }
            }
        }
        (tags, branches)
    }

    /// Parse `git show --name-only --pretty=format:` output into paths
    ///
    /// With `-m` a merge lists its files once per parent, so paths may repeat.
    pub fn parse_name_only(output: &str) -> Vec<String> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse `git tag` output
    pub fn parse_tag_list(output: &str) -> Vec<String> {
        Self::parse_name_only(output)
    }
}
