//! git pretty-format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from git commands
//! regardless of user configuration.

/// Separator used between fields in formatted output (tab character)
pub const FIELD_SEPARATOR: char = '\t';

/// Pretty formats for git commands
pub struct Formats;

impl Formats {
    /// Format for `git log` output
    ///
    /// Fields (separated by tab):
    /// 1. full commit hash
    /// 2. ref names without the surrounding parentheses (`%D`)
    /// 3. subject line
    /// 4. author date (shape controlled by `--date=short`)
    ///
    /// The subject sits between fields with fixed shapes, so a stray tab
    /// inside a subject is rejoined by the parser.
    pub fn log() -> &'static str {
        "--pretty=format:%H%x09%D%x09%s%x09%ad"
    }
}
