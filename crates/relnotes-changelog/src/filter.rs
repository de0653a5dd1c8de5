//! Release filtering by version range

use relnotes_core::{Release, VersionRange};
use tracing::{debug, instrument};

use crate::version::{Bound, VersionVector};

/// Keeps the releases whose tag satisfies an optional min/max range
#[derive(Debug, Clone)]
pub struct ReleaseFilter {
    min: Option<VersionVector>,
    max: Option<VersionVector>,
}

impl ReleaseFilter {
    /// Create a filter for the given range
    pub fn new(range: &VersionRange) -> Self {
        Self {
            min: range.min.as_deref().map(VersionVector::parse),
            max: range.max.as_deref().map(VersionVector::parse),
        }
    }

    /// True when no bound is set and every release passes
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check a single tag label against both bounds
    pub fn accepts(&self, tag: &str) -> bool {
        let version = VersionVector::parse(tag);
        let above_min = self
            .min
            .as_ref()
            .map_or(true, |min| version.satisfies(min, Bound::Min));
        let below_max = self
            .max
            .as_ref()
            .map_or(true, |max| version.satisfies(max, Bound::Max));
        above_min && below_max
    }

    /// Filter releases, preserving their relative order
    #[instrument(skip(self, releases), fields(release_count = releases.len()))]
    pub fn apply(&self, releases: Vec<Release>) -> Vec<Release> {
        if self.is_unbounded() {
            return releases;
        }

        let total = releases.len();
        let kept: Vec<Release> = releases
            .into_iter()
            .filter(|release| self.accepts(&release.tag_name))
            .collect();

        debug!(total, kept = kept.len(), "filtered releases by version range");
        kept
    }
}
