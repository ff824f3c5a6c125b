//! Strength heuristics.
//!
//! Two unrelated formulas are offered and neither is an entropy estimate.
//! Both look only at the password length and the classes the policy
//! *declares*; the characters actually drawn are never inspected.

use std::fmt;
use std::str::FromStr;

use crate::settings::GenerationPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthCategory {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    pub fn label(self) -> &'static str {
        match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Moderate => "Moderate",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which formula `score` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// `length / 4` mapped onto a [`StrengthCategory`].
    #[default]
    Bucket,
    /// `length * class_count * selected_sum`, a bare magnitude.
    Composite,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bucket => f.write_str("bucket"),
            Strategy::Composite => f.write_str("composite"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bucket" => Ok(Strategy::Bucket),
            "composite" => Ok(Strategy::Composite),
            other => Err(format!(
                "unknown strength strategy '{other}' (expected 'bucket' or 'composite')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Category(StrengthCategory),
    Score(usize),
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Category(c) => fmt::Display::fmt(c, f),
            Strength::Score(n) => write!(f, "{n}"),
        }
    }
}

/// Length-bucket strategy.
pub fn bucket(length: usize) -> StrengthCategory {
    match length / 4 {
        0 => StrengthCategory::Weak,
        1 => StrengthCategory::Moderate,
        2 => StrengthCategory::Strong,
        _ => StrengthCategory::VeryStrong,
    }
}

/// Composite strategy. Zero when the policy declares no class.
///
/// `class_count` and `selected_sum` are counted separately but, with boolean
/// flags, always agree, so this is `length * classes²`.
pub fn composite(length: usize, policy: &GenerationPolicy) -> usize {
    let classes = policy.classes();
    let selected_sum = [classes.lower, classes.upper, classes.numbers, classes.symbols]
        .into_iter()
        .map(usize::from)
        .sum::<usize>();
    if selected_sum == 0 {
        return 0;
    }
    length * policy.class_count() * selected_sum
}

pub fn score(length: usize, policy: &GenerationPolicy, strategy: Strategy) -> Strength {
    match strategy {
        Strategy::Bucket => Strength::Category(bucket(length)),
        Strategy::Composite => Strength::Score(composite(length, policy)),
    }
}
