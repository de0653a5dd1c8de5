//! Core types for relnotes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published release as returned by the host API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Tag label (e.g. "v8.2.5")
    pub tag_name: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Markdown body
    #[serde(default)]
    pub body: Option<String>,
    /// Publication timestamp (ISO-8601)
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Release {
    /// Create a release with only a tag label
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            name: None,
            body: None,
            published_at: None,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Parsed publication instant, if present and well-formed
    pub fn published_instant(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Heading text: the display name when non-empty, else the tag label
    pub fn display_title(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}

/// Optional minimum and maximum version bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    /// Lowest accepted version (inclusive, shorthand allowed)
    pub min: Option<String>,
    /// Highest accepted version (inclusive, shorthand allowed)
    pub max: Option<String>,
}

impl VersionRange {
    /// Create a range from optional bounds
    pub fn new(min: Option<String>, max: Option<String>) -> Self {
        Self { min, max }
    }

    /// True when neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl std::fmt::Display for VersionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.min.as_deref().unwrap_or("any"),
            self.max.as_deref().unwrap_or("latest")
        )
    }
}
