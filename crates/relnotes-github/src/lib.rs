//! relnotes github - releases API client
//!
//! This crate fetches every published release of a repository from the
//! GitHub REST API, one page at a time.

mod client;
mod releases;

pub use client::{GithubClient, Result, ACCEPT_HEADER};
pub use releases::PageProgress;
