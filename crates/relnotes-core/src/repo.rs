//! Repository references parsed from URLs

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::RepoUrlError;

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Account or organization owning the repository
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Create a new repository reference
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a repository URL such as `https://github.com/owner/repo`.
    ///
    /// The first two non-empty path segments name the owner and the
    /// repository; anything after them (`/releases`, `/tree/main`) is
    /// ignored. A trailing `.git` on the repository segment is dropped.
    pub fn parse_url(input: &str) -> Result<Self, RepoUrlError> {
        let input = input.trim();
        let url = Url::parse(input).map_err(|e| RepoUrlError::Malformed {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let owner = segments.next();
        let name = segments
            .next()
            .map(|s| s.strip_suffix(".git").unwrap_or(s))
            .filter(|s| !s.is_empty());

        match (owner, name) {
            (Some(owner), Some(name)) => {
                debug!(owner, name, "parsed repository url");
                Ok(Self::new(owner, name))
            }
            _ => Err(RepoUrlError::MissingSegments(input.to_string())),
        }
    }
}

impl FromStr for RepoRef {
    type Err = RepoUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_url(s)
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
