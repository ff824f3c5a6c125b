//! Centralized warning and error messages for stderr.

use crossterm::style::Stylize;

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    eprintln!("{}", msg.yellow());
}

/// Print an error message to stderr (red)
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// No preference file yet; generation falls back to the built-in policy.
pub fn using_default_policy(min: usize, max: usize) {
    warn(&format!(
        "No saved preferences, using defaults: length {min}-{max}, all character types."
    ));
}
