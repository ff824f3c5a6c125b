//! Runtime configuration: store locations and presentation knobs.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::DEFAULT_MAX_LENGTH;
use crate::pass::strength::Strategy;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefs_path: PathBuf,
    pub history_path: PathBuf,
    /// How many history entries "show history" prints.
    pub history_limit: usize,
    /// Ceiling for a policy's `max_length`.
    pub max_length: usize,
    /// Pause after each revealed character. Zero disables the effect.
    pub reveal_delay: Duration,
    pub strategy: Strategy,
}

impl Config {
    /// `$HOME/.config/passgen`, or the working directory without `HOME`.
    pub fn default_dir() -> PathBuf {
        match env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config").join("passgen"),
            None => PathBuf::from("."),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::default_dir();
        Self {
            prefs_path: dir.join("preferences"),
            history_path: dir.join("history"),
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_length: DEFAULT_MAX_LENGTH,
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            strategy: Strategy::default(),
        }
    }
}
