//! relnotes changelog - release filtering and changelog rendering
//!
//! This crate decides which releases fall inside a version range, cleans
//! their bodies, and renders them into one markdown changelog.

pub mod cleaner;
pub mod filter;
pub mod formatter;
pub mod generator;
pub mod types;
pub mod version;
pub mod writer;

pub use cleaner::BodyCleaner;
pub use filter::ReleaseFilter;
pub use generator::ChangelogGenerator;
pub use types::{ChangelogDocument, ChangelogEntry};
pub use version::{matches, Bound, VersionVector};
pub use writer::ChangelogWriter;
