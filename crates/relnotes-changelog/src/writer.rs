//! Writing the rendered changelog to disk

use std::path::{Path, PathBuf};

use relnotes_core::config::OutputConfig;
use relnotes_core::error::ChangelogError;
use tracing::{info, instrument};

/// Writes changelogs into a fixed output directory
#[derive(Debug, Clone)]
pub struct ChangelogWriter {
    directory: PathBuf,
    output: OutputConfig,
}

impl ChangelogWriter {
    /// Create a writer for `directory` using the configured file name template
    pub fn new(directory: impl Into<PathBuf>, output: &OutputConfig) -> Self {
        Self {
            directory: directory.into(),
            output: output.clone(),
        }
    }

    /// Path the changelog for `repo` is written to
    pub fn path_for(&self, repo: &str) -> PathBuf {
        self.directory.join(self.output.file_name_for(repo))
    }

    /// Write `contents`, replacing any existing file
    #[instrument(skip(self, contents), fields(len = contents.len()))]
    pub fn write(&self, repo: &str, contents: &str) -> Result<PathBuf, ChangelogError> {
        if !self.directory.is_dir() {
            return Err(ChangelogError::DirectoryNotFound(self.directory.clone()));
        }

        let path = self.path_for(repo);
        std::fs::write(&path, contents).map_err(|source| ChangelogError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "changelog written");
        Ok(path)
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
