//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::infrastructure::{InfraError, InfraResult};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write plain output (no color, for data) to stdout
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) -> InfraResult<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", msg)
        .and_then(|_| out.flush())
        .map_err(|e| InfraError::io("write to stdout", e))
}
