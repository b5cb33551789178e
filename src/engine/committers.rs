//! Committer aggregation

use std::collections::HashSet;

use tracing::debug;

use crate::github::{GitHubError, RemoteRepository, UserData};
use crate::model::Commit;

/// True when `login` equals or contains any ignored token
pub fn is_ignored(login: &str, ignore: &[String]) -> bool {
    ignore.iter().any(|token| login.contains(token.as_str()))
}

/// Display entry for a resolved user
///
/// `Name ([login](url))`, or `[login](url)` when the profile has no name.
pub fn format_committer(user: &UserData) -> String {
    match user.name.as_deref().filter(|name| !name.is_empty()) {
        Some(name) => format!("{} ([{}]({}))", name, user.login, user.html_url),
        None => format!("[{}]({})", user.login, user.html_url),
    }
}

/// Resolve, deduplicate and sort the authors of a bucket's commits
///
/// Lookups are issued one at a time in commit order, once per login. Any
/// failed lookup fails the whole aggregation.
pub async fn aggregate_committers<R: RemoteRepository + ?Sized>(
    commits: &[Commit],
    ignore: &[String],
    remote: &R,
) -> Result<Vec<String>, GitHubError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut committers = Vec::new();

    for author in commits.iter().filter_map(Commit::author) {
        let login = author.login.as_str();
        if is_ignored(login, ignore) || !seen.insert(login) {
            continue;
        }
        debug!(login, "resolving committer");
        let user = remote.user_data(login).await?;
        committers.push(format_committer(&user));
    }

    committers.sort();
    Ok(committers)
}
