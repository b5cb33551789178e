//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Directory whose immediate children are the repository's packages
pub const PACKAGES_PREFIX: &str = "packages/";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const SHOW: &str = "show";
    pub const TAG: &str = "tag";
    pub const DESCRIBE: &str = "describe";
    pub const CONFIG: &str = "config";
    pub const REV_PARSE: &str = "rev-parse";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given path
    pub const REPO_PATH: &str = "-C";
    /// Short (YYYY-MM-DD) dates in `%ad`
    pub const DATE_SHORT: &str = "--date=short";
    /// Show a merge's diff against each parent
    pub const MERGES_SPLIT: &str = "-m";
    /// Follow only the first parent of merge commits
    pub const FIRST_PARENT: &str = "--first-parent";
    /// Show only names of changed files
    pub const NAME_ONLY: &str = "--name-only";
    /// Suppress the commit header in `git show`
    pub const EMPTY_PRETTY: &str = "--pretty=format:";
    /// Print only the tag name, without the `-N-gSHA` suffix
    pub const ABBREV_ZERO: &str = "--abbrev=0";
    /// Consider lightweight tags too
    pub const TAGS: &str = "--tags";
    /// Read a single config value
    pub const GET: &str = "--get";
    /// Print the working tree root
    pub const SHOW_TOPLEVEL: &str = "--show-toplevel";
}

/// Special git values
pub mod special {
    /// Default upper bound of a commit range
    pub const HEAD: &str = "HEAD";

    /// Prefix of a tag entry in `%D` decorations
    pub const TAG_DECORATION_PREFIX: &str = "tag: ";

    /// Prefix of the checked-out branch in `%D` decorations
    pub const HEAD_DECORATION_PREFIX: &str = "HEAD -> ";

    /// Config key holding the default remote's URL
    pub const ORIGIN_URL_KEY: &str = "remote.origin.url";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";

    /// Pattern emitted by `git describe` when no tag is reachable
    pub const NO_NAMES: &str = "No names found";
}
