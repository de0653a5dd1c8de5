//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::ChangelogDocument;

/// Horizontal rule placed between release sections
const SEPARATOR: &str = "---";

/// Markdown changelog formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, document), fields(repo = %document.repo, entry_count = document.entries.len()))]
    fn format(&self, document: &ChangelogDocument) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {} Changelog\n\n", document.repo));

        if document.is_filtered() {
            output.push_str(&format!("Version range: {}\n\n", document.range));
            output.push_str(&format!(
                "Showing {} of {} releases\n\n",
                document.entries.len(),
                document.total_releases
            ));
        }

        for (index, entry) in document.entries.iter().enumerate() {
            if index > 0 {
                output.push_str(SEPARATOR);
                output.push_str("\n\n");
            }

            output.push_str(&format!("## {}\n\n", entry.title));

            if !entry.body.is_empty() {
                output.push_str(&entry.body);
                output.push_str("\n\n");
            }
        }

        let mut output = output.trim_end().to_string();
        output.push('\n');

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChangelogEntry;
    use relnotes_core::VersionRange;

    fn document(range: VersionRange, total: usize, entries: &[(&str, &str)]) -> ChangelogDocument {
        let mut doc = ChangelogDocument::new("widget", range, total);
        for (title, body) in entries {
            doc.add_entry(ChangelogEntry::new(*title, *body));
        }
        doc
    }

    #[test]
    fn test_format_unfiltered() {
        let doc = document(
            VersionRange::default(),
            2,
            &[("v2.0.0", "Second"), ("v1.0.0", "First")],
        );

        let output = MarkdownFormatter::new().format(&doc);
        assert_eq!(
            output,
            "# widget Changelog\n\n## v2.0.0\n\nSecond\n\n---\n\n## v1.0.0\n\nFirst\n"
        );
    }

    #[test]
    fn test_format_filtered_header() {
        let range = VersionRange::new(Some("8.2".into()), None);
        let doc = document(range, 10, &[("v8.3.0", "Notes")]);

        let output = MarkdownFormatter::new().format(&doc);
        assert!(output.starts_with(
            "# widget Changelog\n\nVersion range: 8.2 to latest\n\nShowing 1 of 10 releases\n\n## v8.3.0"
        ));
    }

    #[test]
    fn test_separators_only_between_entries() {
        let doc = document(
            VersionRange::default(),
            3,
            &[("c", "3"), ("b", "2"), ("a", "1")],
        );

        let output = MarkdownFormatter::new().format(&doc);
        assert_eq!(output.lines().filter(|l| *l == SEPARATOR).count(), 2);
        assert!(!output.trim_end().ends_with(SEPARATOR));
        assert!(!output.starts_with(SEPARATOR));
    }

    #[test]
    fn test_empty_body_omitted() {
        let doc = document(VersionRange::default(), 2, &[("v2", ""), ("v1", "Body")]);

        let output = MarkdownFormatter::new().format(&doc);
        assert_eq!(
            output,
            "# widget Changelog\n\n## v2\n\n---\n\n## v1\n\nBody\n"
        );
    }

    #[test]
    fn test_no_entries_filtered() {
        let range = VersionRange::new(Some("99".into()), Some("100".into()));
        let doc = document(range, 4, &[]);

        let output = MarkdownFormatter::new().format(&doc);
        assert_eq!(
            output,
            "# widget Changelog\n\nVersion range: 99 to 100\n\nShowing 0 of 4 releases\n"
        );
    }

    #[test]
    fn test_no_entries_unfiltered() {
        let doc = document(VersionRange::default(), 0, &[]);
        assert_eq!(MarkdownFormatter::new().format(&doc), "# widget Changelog\n");
    }
}
