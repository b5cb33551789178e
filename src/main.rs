//! relog - release changelogs for multi-package repositories
//!
//! Binary entry point: reads configuration, generates the changelog and
//! prints it to stdout.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use relog::changelog::Changelog;
use relog::cli::Cli;
use relog::config::ConfigFile;
use relog::git::GitExecutor;
use relog::github::{GitHubClient, ResponseCache, parse_github_url};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let markdown = run(&cli).await?;
    println!("{}", markdown);
    Ok(())
}

/// Build the changelog described by the command line
async fn run(cli: &Cli) -> relog::Result<String> {
    let executor = GitExecutor::with_repo_path(cli.repo_path.clone());
    let root = executor.toplevel()?;

    let mut file = ConfigFile::load(&root)?;
    cli.apply_overrides(&mut file);

    // Only ask git for the origin remote when the repo is not given
    let inferred_repo = match file.repo {
        Some(_) => None,
        None => executor.remote_url()?.as_deref().and_then(parse_github_url),
    };
    let config = file.into_config(inferred_repo)?;

    let mut client = GitHubClient::from_env(config.repo.clone());
    if let Some(dir) = &config.cache_dir {
        client = client.with_cache(ResponseCache::new(root.join(dir)));
    }

    Changelog::new(config, executor, client)
        .create_markdown(&cli.range())
        .await
}
