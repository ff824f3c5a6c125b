//! Command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::pass::Strategy;
use crate::settings::{
    Config, DEFAULT_HISTORY_LIMIT, DEFAULT_MAX_LENGTH, DEFAULT_REVEAL_DELAY_MS, MAX_STORABLE_LENGTH,
};

#[derive(Debug, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Generate passwords from chosen character classes, remember preferences and history"
)]
pub struct Args {
    /// Preference file [default: ~/.config/passgen/preferences]
    #[arg(long, env = "PASSGEN_PREFS", value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// History file [default: ~/.config/passgen/history]
    #[arg(long, env = "PASSGEN_HISTORY", value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Entries shown by "Show Password History"
    #[arg(long, value_name = "N", default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Largest maximum length a preference may set
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_LENGTH, value_parser = parse_ceiling)]
    pub max_length: usize,

    /// Pause after each revealed character, 0 to disable
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_REVEAL_DELAY_MS)]
    pub delay_ms: u64,

    /// Strength formula: bucket or composite
    #[arg(long, value_name = "STRATEGY", default_value_t = Strategy::Bucket)]
    pub strength: Strategy,

    /// Menu choice to run instead of prompting (1, 2 or 3)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub choice: Option<i64>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            prefs_path: self.prefs.clone().unwrap_or(defaults.prefs_path),
            history_path: self.history.clone().unwrap_or(defaults.history_path),
            history_limit: self.history_limit,
            max_length: self.max_length,
            reveal_delay: Duration::from_millis(self.delay_ms),
            strategy: self.strength,
        }
    }
}

fn parse_ceiling(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) if n > MAX_STORABLE_LENGTH => Err(format!("must be at most {MAX_STORABLE_LENGTH}")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
