//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::ChangelogDocument;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog document to string
    fn format(&self, document: &ChangelogDocument) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
