//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Repository URL errors
    #[error(transparent)]
    RepoUrl(#[from] RepoUrlError),

    /// Release fetching errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Repository URL errors
#[derive(Debug, Error)]
pub enum RepoUrlError {
    /// The input could not be parsed as a URL
    #[error("Invalid repository URL '{url}': {reason}")]
    Malformed { url: String, reason: String },

    /// The URL path does not name an owner and a repository
    #[error("Repository URL '{0}' must include an owner and a repository name")]
    MissingSegments(String),
}

/// Errors raised while fetching releases from the host API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Host answered with a non-200 status
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode releases: {0}")]
    Decode(#[from] serde_json::Error),

    /// A page request failed; the whole fetch is aborted
    #[error("Failed to fetch releases page {page}")]
    Page {
        page: u32,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    /// Wrap an error with the page number it occurred on
    pub fn on_page(self, page: u32) -> Self {
        Self::Page {
            page,
            source: Box::new(self),
        }
    }
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write changelog
    #[error("Failed to write changelog to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory does not exist
    #[error("Output directory not found: {0}")]
    DirectoryNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_names_page() {
        let err = FetchError::Api {
            status: 404,
            body: "Not Found".to_string(),
        }
        .on_page(3);

        assert!(err.to_string().contains("page 3"));

        let source = std::error::Error::source(&err).unwrap().to_string();
        assert!(source.contains("404"));
        assert!(source.contains("Not Found"));
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: RelnotesError = RepoUrlError::MissingSegments("https://github.com/x".into()).into();
        assert!(err.to_string().contains("owner and a repository"));
    }
}
