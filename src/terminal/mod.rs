//! Shared terminal utilities.
//!
//! Colour helpers and stream flushing.

mod output;

pub use output::*;
