//! relnotes core - shared types, configuration and errors
//!
//! This crate provides the release and repository types, the error
//! hierarchy and the configuration system used by the other relnotes crates.

pub mod config;
pub mod error;
pub mod repo;
pub mod types;

pub use error::{ChangelogError, ConfigError, FetchError, RelnotesError, RepoUrlError, Result};
pub use repo::RepoRef;
pub use types::{Release, VersionRange};
