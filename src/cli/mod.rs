//! Command-line arguments, logging setup and stderr messages.

mod args;
mod logging;
pub mod prompts;

pub use args::Args;
pub use logging::init as init_logging;
