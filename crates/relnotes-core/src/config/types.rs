//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_API_URL, DEFAULT_FILE_NAME, DEFAULT_PAGE_DELAY_MS, DEFAULT_PER_PAGE,
    DEFAULT_TIMEOUT_SECS,
};

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host API configuration
    pub github: GithubConfig,

    /// Output file configuration
    pub output: OutputConfig,

    /// Changelog rendering configuration
    pub changelog: ChangelogConfig,
}

/// Host API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the releases API
    pub api_url: String,

    /// Releases requested per page (1-100)
    pub per_page: u32,

    /// Pause between successful page requests, in milliseconds
    pub page_delay_ms: u64,

    /// Per-request timeout, in seconds
    pub timeout_secs: u64,

    /// Client identifier sent as User-Agent
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

/// Client identifier for the current build
pub fn default_user_agent() -> String {
    format!("relnotes/{}", env!("CARGO_PKG_VERSION"))
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the changelog is written to (defaults to the working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// File name template; `{repo}` is replaced with the repository name
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl OutputConfig {
    /// Resolve the file name for a repository
    pub fn file_name_for(&self, repo: &str) -> String {
        self.file_name.replace("{repo}", repo)
    }
}

/// Changelog rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Strip "New Contributors" sections and "Full Changelog" links
    pub clean_bodies: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self { clean_bodies: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.page_delay_ms, 100);
        assert_eq!(config.github.timeout_secs, 30);
        assert!(config.github.user_agent.starts_with("relnotes/"));
        assert!(config.output.directory.is_none());
        assert!(config.changelog.clean_bodies);
    }

    #[test]
    fn test_file_name_for() {
        let output = OutputConfig::default();
        assert_eq!(output.file_name_for("ripgrep"), "ripgrep-changelog.md");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[github]\nper_page = 50\n").unwrap();
        assert_eq!(config.github.per_page, 50);
        assert_eq!(config.github.page_delay_ms, 100);
        assert_eq!(config.output.file_name, "{repo}-changelog.md");
    }
}
