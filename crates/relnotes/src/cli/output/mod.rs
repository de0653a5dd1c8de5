//! Styled console lines for progress and results

use console::{style, StyledObject};

fn line(marker: StyledObject<&str>, message: &str) -> String {
    format!("{} {}", marker, message)
}

/// Final confirmation, on stdout
pub fn success(message: &str) {
    println!("{}", line(style("✓").green().bold(), message));
}

/// Fatal error, on stderr
pub fn error(message: &str) {
    eprintln!("{}", line(style("✗").red().bold(), message));
}

/// Non-fatal notice, on stdout
pub fn warning(message: &str) {
    println!("{}", line(style("!").yellow().bold(), message));
}

/// Progress line, on stdout
pub fn info(message: &str) {
    println!("{}", line(style("→").blue(), message));
}
