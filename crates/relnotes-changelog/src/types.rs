//! Changelog types

use relnotes_core::VersionRange;
use serde::{Deserialize, Serialize};

/// One release section of a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Heading text (display name or tag label)
    pub title: String,
    /// Cleaned body, empty when there is nothing to show
    pub body: String,
}

impl ChangelogEntry {
    /// Create a new entry
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A complete changelog for one repository, entries newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogDocument {
    /// Repository name used in the title
    pub repo: String,
    /// Bounds the releases were filtered with
    pub range: VersionRange,
    /// Number of releases before filtering
    pub total_releases: usize,
    /// Rendered entries
    pub entries: Vec<ChangelogEntry>,
}

impl ChangelogDocument {
    /// Create an empty document
    pub fn new(repo: impl Into<String>, range: VersionRange, total_releases: usize) -> Self {
        Self {
            repo: repo.into(),
            range,
            total_releases,
            entries: Vec::new(),
        }
    }

    /// Add an entry
    pub fn add_entry(&mut self, entry: ChangelogEntry) {
        self.entries.push(entry);
    }

    /// Whether a range line and count line belong in the header
    pub fn is_filtered(&self) -> bool {
        !self.range.is_unbounded()
    }

    /// Check if the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document() {
        let mut doc = ChangelogDocument::new("repo", VersionRange::default(), 3);
        assert!(doc.is_empty());
        assert!(!doc.is_filtered());

        doc.add_entry(ChangelogEntry::new("v1.0.0", "notes"));
        assert!(!doc.is_empty());
        assert_eq!(doc.total_releases, 3);
    }

    #[test]
    fn test_filtered_document() {
        let range = VersionRange::new(None, Some("2".into()));
        let doc = ChangelogDocument::new("repo", range, 0);
        assert!(doc.is_filtered());
    }
}
