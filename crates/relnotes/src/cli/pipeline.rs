//! Fetch, filter, render and write

use std::path::Path;

use console::style;
use tracing::{debug, info};

use relnotes_changelog::{ChangelogGenerator, ChangelogWriter, ReleaseFilter};
use relnotes_core::config::Config;
use relnotes_core::RepoRef;
use relnotes_github::GithubClient;

use crate::cli::{output, Cli};

/// Run the whole pipeline. Nothing is written unless every step succeeds.
pub fn run(cli: &Cli, repo_url: &str, config: &Config, output_dir: &Path) -> anyhow::Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;
    cli.progress(&format!(
        "Repository: {}",
        style(&repo).yellow()
    ));

    let client = GithubClient::new(config.github.clone())?;
    let runtime = tokio::runtime::Runtime::new()?;
    let releases = runtime.block_on(client.fetch_releases(&repo, |progress| {
        cli.progress(&format!(
            "Fetched page {} ({} releases, {} so far)",
            progress.page, progress.received, progress.total
        ));
    }))?;

    let total = releases.len();
    if total == 0 {
        if !cli.quiet {
            output::warning("No releases found");
        }
    } else {
        cli.progress(&format!("Found {} releases", style(total).bold()));
    }

    let range = cli.version_range();
    let filtered = if range.is_unbounded() {
        releases
    } else {
        cli.progress(&format!(
            "Version range: {}",
            style(&range).green().bold()
        ));
        let filtered = ReleaseFilter::new(&range).apply(releases);
        cli.progress(&format!("Showing {} of {} releases", filtered.len(), total));
        filtered
    };

    let generator = ChangelogGenerator::new(config.changelog.clone());
    let contents = generator.generate_formatted(&repo.name, filtered, &range, total);
    debug!(len = contents.len(), "changelog rendered");

    let path = ChangelogWriter::new(output_dir, &config.output).write(&repo.name, &contents)?;
    info!(path = %path.display(), repo = %repo, "changelog run complete");

    if !cli.quiet {
        output::success(&format!(
            "Changelog saved to {}",
            style(path.display()).cyan()
        ));
    }

    Ok(())
}
