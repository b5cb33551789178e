//! Markdown rendering
//!
//! Turns processed releases into the changelog text. Releases where no
//! configured label matched any commit are left out.

use crate::model::{CategorySection, Commit, Release};

/// Render releases in order, separated by a blank line
pub fn render_markdown(releases: &[Release], base_issue_url: &str) -> String {
    let blocks: Vec<String> = releases
        .iter()
        .filter(|release| !release.is_empty())
        .map(|release| render_release(release, base_issue_url))
        .collect();
    blocks.join("\n")
}

/// Render one release block, ending with a newline
pub fn render_release(release: &Release, base_issue_url: &str) -> String {
    let mut out = format!("## {} ({})\n", release.title, release.date.format("%Y-%m-%d"));

    for section in &release.sections {
        out.push('\n');
        out.push_str(&render_section(section, base_issue_url));
    }

    if !release.committers.is_empty() {
        out.push('\n');
        out.push_str(&format!("#### Committers: {}\n", release.committers.len()));
        for committer in &release.committers {
            out.push_str(&format!("- {}\n", committer));
        }
    }
    out
}

fn render_section(section: &CategorySection, base_issue_url: &str) -> String {
    let mut out = format!("#### {}\n", section.heading);

    if section.single_implicit_group {
        for commit in section.groups.iter().flat_map(|g| &g.commits) {
            out.push_str(&format!("* {}\n", commit_line(commit, base_issue_url)));
        }
        return out;
    }

    for group in &section.groups {
        out.push_str(&format!("* {}\n", group.heading));
        for commit in &group.commits {
            out.push_str(&format!("  * {}\n", commit_line(commit, base_issue_url)));
        }
    }
    out
}

/// `[#12](url) Title ([@login](profile))`
pub fn commit_line(commit: &Commit, base_issue_url: &str) -> String {
    let link = match (commit.pull_request(), commit.issue_number()) {
        (Some(pr), _) => Some(format!("[#{}]({})", pr.number, pr.html_url)),
        (None, Some(number)) => Some(format!("[#{}]({}{})", number, base_issue_url, number)),
        (None, None) => None,
    };

    let mut line = match link {
        Some(link) => format!("{} {}", link, commit.display_title()),
        None => commit.display_title().to_string(),
    };
    if let Some(author) = commit.author() {
        line.push_str(&format!(" ([@{}]({}))", author.login, author.html_url));
    }
    line
}
