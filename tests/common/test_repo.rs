//! TestRepo helper for integration tests.
//!
//! Provides a temporary git repository with deterministic commit dates.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary git repository for testing.
///
/// The repository is automatically cleaned up when the TestRepo is dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new git repository on a `main` branch.
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };

        repo.git(&["init", "-q"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);
        repo
    }

    /// Get the path to the repository root.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Execute a git command in this repository.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, args: &[&str]) -> String {
        self.git_with_env(args, &[])
    }

    fn git_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> String {
        let output = Command::new("git")
            .args(args)
            .envs(env.iter().copied())
            .current_dir(self.path())
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the repository.
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Stage everything and commit with author and committer dated `date`
    /// (`YYYY-MM-DD`). Returns the new commit's sha.
    pub fn commit_on(&self, message: &str, date: &str) -> String {
        let timestamp = format!("{}T12:00:00+00:00", date);
        let env = [
            ("GIT_AUTHOR_DATE", timestamp.as_str()),
            ("GIT_COMMITTER_DATE", timestamp.as_str()),
        ];
        self.git(&["add", "-A"]);
        self.git_with_env(&["commit", "-q", "--allow-empty", "-m", message], &env);
        self.head()
    }

    /// Write one file and commit it
    pub fn commit_file(&self, path: &str, message: &str, date: &str) -> String {
        self.write_file(path, message);
        self.commit_on(message, date)
    }

    /// Merge `branch` into the current branch with a merge commit
    pub fn merge_on(&self, branch: &str, message: &str, date: &str) -> String {
        let timestamp = format!("{}T12:00:00+00:00", date);
        let env = [
            ("GIT_AUTHOR_DATE", timestamp.as_str()),
            ("GIT_COMMITTER_DATE", timestamp.as_str()),
        ];
        self.git_with_env(&["merge", "-q", "--no-ff", "-m", message, branch], &env);
        self.head()
    }

    /// Create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        self.git(&["tag", name]);
    }

    /// Sha of HEAD
    pub fn head(&self) -> String {
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    /// Add a remote to this repository.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
