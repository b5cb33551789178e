//! On-disk cache of GitHub response bodies
//!
//! Issues and users of past releases rarely change, so repeated runs over the
//! same range can skip the network entirely.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::GitHubError;

/// Directory of cached JSON bodies, one file per request
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding the body for `kind`/`key`
    fn entry_path(&self, kind: &str, key: &str) -> PathBuf {
        let key: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}-{}.json", kind, key))
    }

    /// Cached body, if present
    pub fn get(&self, kind: &str, key: &str) -> Result<Option<String>, GitHubError> {
        let path = self.entry_path(kind, key);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GitHubError::Cache { path, source }),
        }
    }

    /// Store a body, replacing any previous entry atomically
    pub fn put(&self, kind: &str, key: &str, body: &str) -> Result<(), GitHubError> {
        let path = self.entry_path(kind, key);
        let cache_err = |source: std::io::Error| GitHubError::Cache {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(cache_err)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(&self.dir).map_err(cache_err)?;
        temp_file.write_all(body.as_bytes()).map_err(cache_err)?;
        temp_file.flush().map_err(cache_err)?;
        temp_file.persist(&path).map_err(|e| cache_err(e.error))?;
        Ok(())
    }
}
