//! CLI definition and command handling

pub mod output;
mod pipeline;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use relnotes_core::config::{load_config, load_config_or_default, validate_config, Config};
use relnotes_core::VersionRange;

/// relnotes - build one changelog from every GitHub release of a repository
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository URL (e.g. https://github.com/owner/repo)
    #[arg(value_name = "REPO_URL")]
    pub repo_url: Option<String>,

    /// Oldest version to include; shorthand like "8" or "8.2" is inclusive
    #[arg(long, value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Newest version to include; shorthand like "8" or "8.2" is inclusive
    #[arg(long, value_name = "VERSION")]
    pub max_version: Option<String>,

    /// Directory to write the changelog into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (default: search for relnotes.toml / relnotes.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Releases API base URL
    #[arg(long, env = "RELNOTES_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the changelog run for `repo_url`
    pub fn execute(&self, repo_url: &str) -> anyhow::Result<()> {
        info!(
            repo_url,
            min_version = ?self.min_version,
            max_version = ?self.max_version,
            "executing changelog run"
        );
        let cwd = std::env::current_dir()?;
        let config = self.resolve_config(&cwd)?;
        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| config.output.directory.clone())
            .unwrap_or(cwd);

        pipeline::run(self, repo_url, &config, &output_dir)
    }

    /// Version bounds given on the command line
    pub fn version_range(&self) -> VersionRange {
        VersionRange::new(self.min_version.clone(), self.max_version.clone())
    }

    /// Print a progress line unless running quietly
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            output::info(message);
        }
    }

    fn resolve_config(&self, cwd: &Path) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_config_or_default(cwd)?.0,
        };

        if let Some(api_url) = &self.api_url {
            config.github.api_url = api_url.clone();
            validate_config(&config)?;
        }

        Ok(config)
    }
}
