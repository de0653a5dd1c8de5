//! Paginated release listing

use std::time::Duration;

use tracing::{info, instrument};

use relnotes_core::{Release, RepoRef};

use crate::client::{GithubClient, Result};

/// Progress reported after each successfully fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based page number
    pub page: u32,
    /// Releases on this page
    pub received: usize,
    /// Releases accumulated so far
    pub total: usize,
}

impl GithubClient {
    /// Fetch every release of a repository.
    ///
    /// Pages are requested one at a time starting at page 1 until a page
    /// comes back short. The configured delay is awaited between pages.
    /// Any failing page aborts the whole listing; the error names the page.
    #[instrument(skip(self, repo, on_page), fields(repo = %repo))]
    pub async fn fetch_releases<F>(&self, repo: &RepoRef, mut on_page: F) -> Result<Vec<Release>>
    where
        F: FnMut(PageProgress),
    {
        let start = std::time::Instant::now();
        let per_page = self.config.per_page as usize;
        let delay = Duration::from_millis(self.config.page_delay_ms);

        let mut releases = Vec::new();
        let mut page = 1;

        loop {
            let batch = self
                .fetch_page(repo, page)
                .await
                .map_err(|e| e.on_page(page))?;
            let received = batch.len();
            releases.extend(batch);

            on_page(PageProgress {
                page,
                received,
                total: releases.len(),
            });

            if received < per_page {
                break;
            }

            tokio::time::sleep(delay).await;
            page += 1;
        }

        info!(
            pages = page,
            count = releases.len(),
            duration_ms = start.elapsed().as_millis(),
            "fetched all releases"
        );
        Ok(releases)
    }
}
