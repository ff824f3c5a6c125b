//! Interactive menu.

mod input;
mod menu;
mod text;

use std::io;

pub use menu::{MenuChoice, Shell};

use crate::error::Result;
use crate::settings::Config;

/// Run the menu on stdin/stdout.
pub fn run(config: &Config, choice: Option<i64>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(config, stdin.lock(), stdout.lock()).run(choice)
}
