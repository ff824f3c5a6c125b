//! Password generator backed by the operating system CSPRNG, with stored
//! preferences and a generation history.

pub mod cli;
pub mod error;
pub mod exits;
pub mod history;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{AppError, PolicyError, StoreError};
pub use history::HistoryLog;
pub use pass::{Password, generate};
pub use settings::{Classes, Config, GenerationPolicy, PreferenceStore};
