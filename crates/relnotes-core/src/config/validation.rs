//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::MAX_PER_PAGE;
use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_github(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    if url::Url::parse(&config.github.api_url).is_err() {
        return Err(ConfigError::InvalidValue {
            field: "github.api_url".to_string(),
            message: format!("'{}' is not a valid URL", config.github.api_url),
        }
        .into());
    }

    if config.github.per_page == 0 || config.github.per_page > MAX_PER_PAGE {
        return Err(ConfigError::InvalidValue {
            field: "github.per_page".to_string(),
            message: format!("must be between 1 and {}", MAX_PER_PAGE),
        }
        .into());
    }

    if config.github.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "github.timeout_secs".to_string(),
            message: "timeout must be greater than zero".to_string(),
        }
        .into());
    }

    if config.github.user_agent.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "github.user_agent".to_string(),
            message: "user agent cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if !config.output.file_name.contains("{repo}") {
        return Err(ConfigError::InvalidValue {
            field: "output.file_name".to_string(),
            message: "must contain {repo} placeholder".to_string(),
        }
        .into());
    }

    Ok(())
}
