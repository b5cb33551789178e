//! GitHub REST API client
//!
//! Fetches issues (pull requests are issues too) and user profiles, with an
//! optional on-disk cache in front of the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::cache::ResponseCache;
use super::types::ApiErrorBody;
use super::{GitHubError, IssueData, RemoteRepository, UserData};

/// Public API endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Web root used for issue links
pub const GITHUB_WEB_URL: &str = "https://github.com";

/// Environment variables checked for an API token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_AUTH", "GITHUB_TOKEN"];

const USER_AGENT: &str = concat!("relog/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Extract `owner/repo` from a GitHub remote URL.
///
/// Supports `https://github.com/owner/repo(.git)` and
/// `git@github.com:owner/repo(.git)`.
///
/// ```
/// use relog::github::parse_github_url;
///
/// assert_eq!(parse_github_url("git@github.com:o/r.git").as_deref(), Some("o/r"));
/// ```
pub fn parse_github_url(url: &str) -> Option<String> {
    let url = url.trim();
    let path = url
        .strip_prefix("git@github.com:")
        .or_else(|| url.split_once("github.com/").map(|(_, rest)| rest))?;

    let mut parts = path.split('/');
    let owner = parts.next().filter(|s| !s.is_empty())?;
    let repo = parts
        .next()
        .map(|s| s.trim_end_matches(".git"))
        .filter(|s| !s.is_empty())?;
    Some(format!("{}/{}", owner, repo))
}

/// Client for one GitHub repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    /// `owner/name`
    repo: String,
    api_url: String,
    token: Option<String>,
    cache: Option<ResponseCache>,
}

impl GitHubClient {
    /// Create an unauthenticated client for `owner/name`
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            repo: repo.into(),
            api_url: GITHUB_API_URL.to_string(),
            token: None,
            cache: None,
        }
    }

    /// Create a client picking up a token from the environment
    pub fn from_env(repo: impl Into<String>) -> Self {
        let token = TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|t| !t.is_empty()));
        if token.is_none() {
            warn!(
                "No GitHub token in {}; requests are unauthenticated and heavily rate limited",
                TOKEN_ENV_VARS.join(" or ")
            );
        }

        let client = Self::new(repo);
        match token {
            Some(token) => client.with_token(token),
            None => client,
        }
    }

    /// Point the client at another API root (GitHub Enterprise, tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// GET `path` and decode the body, consulting the cache first
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        kind: &str,
        key: &str,
        path: &str,
    ) -> Result<T, GitHubError> {
        if let Some(cache) = &self.cache
            && let Some(body) = cache.get(kind, key)?
        {
            debug!(kind, key, "cache hit");
            return Ok(serde_json::from_str(&body)?);
        }

        let url = format!("{}{}", self.api_url, path);
        debug!(%url, "fetching");

        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .timeout(REQUEST_TIMEOUT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = Self::check_status(request.send().await?).await?;
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;

        if let Some(cache) = &self.cache {
            cache.put(kind, key, &body)?;
        }
        Ok(value)
    }

    /// Turn non-success responses into errors
    async fn check_status(response: Response) -> Result<Response, GitHubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let exhausted = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");
        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && exhausted)
        {
            return Err(GitHubError::RateLimited);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(GitHubError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteRepository for GitHubClient {
    async fn issue_data(&self, number: u64) -> Result<IssueData, GitHubError> {
        let key = number.to_string();
        let path = format!("/repos/{}/issues/{}", self.repo, number);
        self.fetch_json("issue", &key, &path).await
    }

    async fn user_data(&self, login: &str) -> Result<UserData, GitHubError> {
        let path = format!("/users/{}", login);
        self.fetch_json("user", login, &path).await
    }

    fn base_issue_url(&self) -> String {
        format!("{}/{}/issues/", GITHUB_WEB_URL, self.repo)
    }
}
