//! Release body cleanup
//!
//! Hosted release notes often end with an auto-generated "New Contributors"
//! list and a "Full Changelog" compare link. Neither is useful once the
//! notes of many releases are concatenated, so both are removed here.

use tracing::trace;

const CONTRIBUTORS_HEADINGS: [&str; 3] = [
    "## New Contributors",
    "### New Contributors",
    "**New Contributors**",
];

const FULL_CHANGELOG_PREFIXES: [&str; 2] = ["**Full Changelog**:", "Full Changelog:"];

const CONTRIBUTORS_MARKER: &str = "New Contributors";

/// Scanner state while walking a body line by line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Lines are emitted
    Normal,
    /// Inside a "New Contributors" section; lines are dropped
    SkippingContributors,
}

/// What to do with the line that produced a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Keep the line
    Emit,
    /// Drop the line
    Drop,
}

impl ScanState {
    /// Advance the scanner by one line.
    ///
    /// Checks run in a fixed order: section start, changelog link, section
    /// end, then emission. A heading that ends a skipped section is itself
    /// emitted.
    pub fn step(self, line: &str) -> (ScanState, LineAction) {
        let trimmed = line.trim();

        if CONTRIBUTORS_HEADINGS.iter().any(|h| trimmed.starts_with(h)) {
            return (ScanState::SkippingContributors, LineAction::Drop);
        }

        if FULL_CHANGELOG_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return (self, LineAction::Drop);
        }

        let state = match self {
            ScanState::SkippingContributors
                if trimmed.starts_with("##") && !trimmed.contains(CONTRIBUTORS_MARKER) =>
            {
                ScanState::Normal
            }
            other => other,
        };

        match state {
            ScanState::Normal => (state, LineAction::Emit),
            ScanState::SkippingContributors => (state, LineAction::Drop),
        }
    }
}

/// Strips contributor sections and changelog links from release bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyCleaner;

impl BodyCleaner {
    /// Create a new cleaner
    pub fn new() -> Self {
        Self
    }

    /// Clean a body, returning trimmed text (empty for an absent body)
    pub fn clean(&self, body: Option<&str>) -> String {
        let Some(body) = body else {
            return String::new();
        };

        let mut state = ScanState::Normal;
        let mut kept = Vec::new();

        for line in body.lines() {
            let (next, action) = state.step(line);
            if next != state {
                trace!(?state, ?next, line, "cleaner state change");
            }
            if action == LineAction::Emit {
                kept.push(line);
            }
            state = next;
        }

        kept.join("\n").trim().to_string()
    }
}
