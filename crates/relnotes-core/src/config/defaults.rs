//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Default releases API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the releases API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;

/// Default pause between pages, in milliseconds
pub const DEFAULT_PAGE_DELAY_MS: u64 = 100;

/// Default per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default output file name template
pub const DEFAULT_FILE_NAME: &str = "{repo}-changelog.md";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relnotes.toml",
        ".relnotes.yaml",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_names_prefer_toml() {
        let names = config_file_names();
        assert_eq!(names[0], DEFAULT_CONFIG_TOML);
        assert!(names.contains(&".relnotes.yaml"));
    }
}
