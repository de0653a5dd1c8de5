//! Changelog generation

use relnotes_core::config::ChangelogConfig;
use relnotes_core::{Release, VersionRange};
use tracing::{debug, info, instrument};

use crate::cleaner::BodyCleaner;
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::types::{ChangelogDocument, ChangelogEntry};

/// Turns filtered releases into a changelog document
pub struct ChangelogGenerator {
    cleaner: BodyCleaner,
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new(config: ChangelogConfig) -> Self {
        Self {
            cleaner: BodyCleaner::new(),
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// File extension of the configured formatter
    pub fn extension(&self) -> &'static str {
        self.formatter.extension()
    }

    /// Build a document from releases.
    ///
    /// Entries are ordered newest first by publication time. The sort is
    /// stable, and releases without a parseable timestamp go last.
    #[instrument(skip(self, releases, range), fields(release_count = releases.len()))]
    pub fn generate(
        &self,
        repo: &str,
        releases: Vec<Release>,
        range: &VersionRange,
        total_releases: usize,
    ) -> ChangelogDocument {
        info!(repo, release_count = releases.len(), total_releases, "generating changelog");

        let mut dated: Vec<_> = releases
            .into_iter()
            .map(|release| (release.published_instant(), release))
            .collect();
        dated.sort_by(|(a, _), (b, _)| b.cmp(a));

        let mut document = ChangelogDocument::new(repo, range.clone(), total_releases);
        for (_, release) in dated {
            let body = if self.config.clean_bodies {
                self.cleaner.clean(release.body.as_deref())
            } else {
                release.body.as_deref().unwrap_or_default().trim().to_string()
            };
            document.add_entry(ChangelogEntry::new(release.display_title(), body));
        }

        debug!(entry_count = document.entries.len(), "changelog entries built");
        document
    }

    /// Format a document to string
    pub fn format(&self, document: &ChangelogDocument) -> String {
        self.formatter.format(document)
    }

    /// Generate and format in one step
    pub fn generate_formatted(
        &self,
        repo: &str,
        releases: Vec<Release>,
        range: &VersionRange,
        total_releases: usize,
    ) -> String {
        let document = self.generate(repo, releases, range, total_releases);
        let output = self.format(&document);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str, published_at: &str) -> Release {
        Release::new(tag).with_published_at(published_at)
    }

    fn titles(document: &ChangelogDocument) -> Vec<&str> {
        document.entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sorted_newest_first() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default());
        let releases = vec![
            release("v2", "2021-06-01T00:00:00Z"),
            release("v1", "2020-01-01T00:00:00Z"),
            release("v3", "2022-03-01T00:00:00Z"),
        ];

        let document = generator.generate("repo", releases, &VersionRange::default(), 3);
        assert_eq!(titles(&document), vec!["v3", "v2", "v1"]);
    }

    #[test]
    fn test_timezone_offsets_compare_as_instants() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default());
        let releases = vec![
            release("early", "2021-01-01T10:00:00+02:00"),
            release("late", "2021-01-01T09:00:00Z"),
        ];

        let document = generator.generate("repo", releases, &VersionRange::default(), 2);
        assert_eq!(titles(&document), vec!["late", "early"]);
    }

    #[test]
    fn test_undated_releases_last() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default());
        let releases = vec![
            Release::new("draft"),
            release("v1", "2020-01-01T00:00:00Z"),
        ];

        let document = generator.generate("repo", releases, &VersionRange::default(), 2);
        assert_eq!(titles(&document), vec!["v1", "draft"]);
    }

    #[test]
    fn test_bodies_cleaned_and_named() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default());
        let releases = vec![release("v1.0.0", "2020-01-01T00:00:00Z")
            .with_name("First release")
            .with_body("Initial\n\n**Full Changelog**: https://example.com")];

        let document = generator.generate("repo", releases, &VersionRange::default(), 1);
        assert_eq!(document.entries[0].title, "First release");
        assert_eq!(document.entries[0].body, "Initial");
    }

    #[test]
    fn test_cleaning_disabled() {
        let generator = ChangelogGenerator::new(ChangelogConfig {
            clean_bodies: false,
        });
        let releases =
            vec![Release::new("v1").with_body("Initial\n**Full Changelog**: https://example.com\n")];

        let document = generator.generate("repo", releases, &VersionRange::default(), 1);
        assert!(document.entries[0].body.contains("Full Changelog"));
    }

    struct TitleList;

    impl ChangelogFormatter for TitleList {
        fn format(&self, document: &ChangelogDocument) -> String {
            titles(document).join(",")
        }

        fn extension(&self) -> &'static str {
            "txt"
        }
    }

    #[test]
    fn test_custom_formatter() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default()).with_formatter(TitleList);
        assert_eq!(generator.extension(), "txt");

        let output = generator.generate_formatted(
            "repo",
            vec![
                release("a", "2020-01-01T00:00:00Z"),
                release("b", "2021-01-01T00:00:00Z"),
            ],
            &VersionRange::default(),
            2,
        );
        assert_eq!(output, "b,a");
    }

    #[test]
    fn test_generate_formatted() {
        let generator = ChangelogGenerator::new(ChangelogConfig::default());
        assert_eq!(generator.extension(), "md");

        let output = generator.generate_formatted(
            "tool",
            vec![release("v1.0.0", "2020-01-01T00:00:00Z")],
            &VersionRange::default(),
            1,
        );
        assert!(output.starts_with("# tool Changelog\n\n"));
        assert!(output.contains("## v1.0.0"));
    }
}
