//! Password generation, strength scoring and reveal output.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

pub use charset::{CharClass, Charset};
pub use generate::{Password, generate};
pub use strength::{Strategy, Strength, StrengthCategory};
