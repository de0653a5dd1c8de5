//! Lenient version labels and shorthand bound matching
//!
//! Release tags are not guaranteed to be valid SemVer (`v8.2.5`, `8.2`,
//! `release-3`, `2.0.0-rc1`), so labels are decomposed into a plain vector
//! of integers instead of being parsed strictly. Unparseable pieces become
//! `0` and never abort a run.

/// Which side of a range a pattern bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Pattern is the lowest accepted version
    Min,
    /// Pattern is the highest accepted version
    Max,
}

/// Numeric decomposition of a version label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionVector(Vec<u64>);

impl VersionVector {
    /// Parse a label: strip one leading `v`, split on `.`, drop every
    /// non-digit character of a segment, parse what remains. Empty or
    /// overflowing segments become `0`.
    pub fn parse(label: &str) -> Self {
        let label = label.strip_prefix('v').unwrap_or(label);
        let components = label
            .split('.')
            .map(|segment| {
                let digits: String = segment.chars().filter(char::is_ascii_digit).collect();
                digits.parse::<u64>().unwrap_or(0)
            })
            .collect();
        Self(components)
    }

    /// Components in order
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// Component at `index`, `0` past the end
    pub fn component(&self, index: usize) -> u64 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Check whether this version satisfies `pattern` as the given bound.
    ///
    /// Only the pattern's components are compared, so a shorthand pattern is
    /// inclusive of everything it prefixes: `8` as a minimum admits `8.0.0`
    /// and as a maximum admits `8.99.1`.
    pub fn satisfies(&self, pattern: &VersionVector, bound: Bound) -> bool {
        for (index, &wanted) in pattern.0.iter().enumerate() {
            let actual = self.component(index);
            if actual < wanted {
                return bound == Bound::Max;
            }
            if actual > wanted {
                return bound == Bound::Min;
            }
        }
        true
    }
}

/// Decide whether `version` satisfies `pattern` as a minimum or maximum
pub fn matches(version: &str, pattern: &str, bound: Bound) -> bool {
    VersionVector::parse(version).satisfies(&VersionVector::parse(pattern), bound)
}
