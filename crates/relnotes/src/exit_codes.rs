//! Exit codes for the CLI

/// Success
pub const SUCCESS: u8 = 0;

/// Any usage, URL, fetch or write error
pub const ERROR: u8 = 1;
