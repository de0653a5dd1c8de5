//! HTTP client for the releases endpoint

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use relnotes_core::config::GithubConfig;
use relnotes_core::error::FetchError;
use relnotes_core::{Release, RepoRef};

/// Result type for release fetching
pub type Result<T> = std::result::Result<T, FetchError>;

/// Media type requested from the API
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub releases API client
pub struct GithubClient {
    pub(crate) client: Client,
    pub(crate) config: GithubConfig,
}

impl GithubClient {
    /// Create a client with the configured user agent and request timeout
    pub fn new(config: GithubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Releases endpoint for a repository
    pub fn releases_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.config.api_url.trim_end_matches('/'),
            repo.owner,
            repo.name
        )
    }

    /// Fetch a single 1-based page of releases
    #[instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn fetch_page(&self, repo: &RepoRef, page: u32) -> Result<Vec<Release>> {
        let start = std::time::Instant::now();
        let response = self
            .client
            .get(self.releases_url(repo))
            .query(&[("page", page), ("per_page", self.config.per_page)])
            .header(ACCEPT, ACCEPT_HEADER)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let releases: Vec<Release> = serde_json::from_str(&body)?;
        debug!(
            page,
            count = releases.len(),
            duration_ms = start.elapsed().as_millis(),
            "fetched releases page"
        );
        Ok(releases)
    }
}
