//! Generation policy, runtime configuration and preference persistence.

mod config;
mod file;

pub use config::{Config, DEFAULT_HISTORY_LIMIT, DEFAULT_REVEAL_DELAY_MS};
pub use file::PreferenceStore;

use crate::error::PolicyError;
use crate::pass::charset::CharClass;

/// Default upper bound on `max_length`.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Largest length the preference record can hold. Any ceiling above this is
/// clamped to it.
pub const MAX_STORABLE_LENGTH: usize = i32::MAX as usize;

/// Which character classes a policy draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classes {
    pub lower: bool,
    pub upper: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Classes {
    pub const ALL: Classes = Classes {
        lower: true,
        upper: true,
        numbers: true,
        symbols: true,
    };

    pub const NONE: Classes = Classes {
        lower: false,
        upper: false,
        numbers: false,
        symbols: false,
    };

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digits => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Selected classes, always in lower, upper, digits, symbols order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |&c| self.contains(c))
    }

    pub fn count(self) -> usize {
        self.iter().count()
    }
}

/// User-chosen length bounds and character classes.
///
/// Length bounds are validated on construction. A policy with no class
/// selected is representable (and storable) but generation refuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    min_length: usize,
    max_length: usize,
    classes: Classes,
}

impl GenerationPolicy {
    pub fn new(
        min_length: usize,
        max_length: usize,
        classes: Classes,
        ceiling: usize,
    ) -> Result<Self, PolicyError> {
        let ceiling = ceiling.min(MAX_STORABLE_LENGTH);
        if min_length == 0 {
            return Err(PolicyError::MinLengthZero);
        }
        if min_length > max_length {
            return Err(PolicyError::MinExceedsMax {
                min: min_length,
                max: max_length,
            });
        }
        if max_length > ceiling {
            return Err(PolicyError::ExceedsCeiling {
                max: max_length,
                ceiling,
            });
        }
        Ok(Self {
            min_length,
            max_length,
            classes,
        })
    }

    /// The built-in 12-16, all-classes policy, with both bounds lowered to
    /// `ceiling` when it is smaller.
    pub fn default_within(ceiling: usize) -> Result<Self, PolicyError> {
        let default = Self::default();
        Self::new(
            default.min_length.min(ceiling),
            default.max_length.min(ceiling),
            default.classes,
            ceiling,
        )
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn classes(&self) -> Classes {
        self.classes
    }

    /// Number of classes declared by the policy.
    pub fn class_count(&self) -> usize {
        self.classes.count()
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 16,
            classes: Classes::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lowered_to_a_small_ceiling() {
        assert_eq!(
            GenerationPolicy::default_within(DEFAULT_MAX_LENGTH),
            Ok(GenerationPolicy::default())
        );

        let policy = GenerationPolicy::default_within(14).unwrap();
        assert_eq!((policy.min_length(), policy.max_length()), (12, 14));

        let policy = GenerationPolicy::default_within(8).unwrap();
        assert_eq!((policy.min_length(), policy.max_length()), (8, 8));
        assert_eq!(policy.classes(), Classes::ALL);
    }

    #[test]
    fn ceiling_is_clamped_to_storable_length() {
        let huge = MAX_STORABLE_LENGTH + 1;
        assert_eq!(
            GenerationPolicy::new(1, huge, Classes::ALL, usize::MAX),
            Err(PolicyError::ExceedsCeiling {
                max: huge,
                ceiling: MAX_STORABLE_LENGTH,
            })
        );
        assert!(GenerationPolicy::new(1, MAX_STORABLE_LENGTH, Classes::ALL, usize::MAX).is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            GenerationPolicy::new(0, 8, Classes::ALL, 100),
            Err(PolicyError::MinLengthZero)
        );
        assert_eq!(
            GenerationPolicy::new(9, 8, Classes::ALL, 100),
            Err(PolicyError::MinExceedsMax { min: 9, max: 8 })
        );
        assert_eq!(
            GenerationPolicy::new(8, 101, Classes::ALL, 100),
            Err(PolicyError::ExceedsCeiling {
                max: 101,
                ceiling: 100
            })
        );
    }

    #[test]
    fn accepts_boundaries() {
        let p = GenerationPolicy::new(1, 1, Classes::ALL, 100).unwrap();
        assert_eq!((p.min_length(), p.max_length()), (1, 1));
        assert!(GenerationPolicy::new(100, 100, Classes::ALL, 100).is_ok());
    }

    #[test]
    fn empty_classes_are_representable() {
        let p = GenerationPolicy::new(8, 8, Classes::NONE, 100).unwrap();
        assert_eq!(p.class_count(), 0);
    }

    #[test]
    fn classes_iterate_in_fixed_order() {
        let classes = Classes {
            lower: false,
            upper: true,
            numbers: false,
            symbols: true,
        };
        let order: Vec<CharClass> = classes.iter().collect();
        assert_eq!(order, vec![CharClass::Upper, CharClass::Symbols]);
        assert_eq!(Classes::ALL.count(), 4);
    }

    #[test]
    fn default_policy_is_valid() {
        let d = GenerationPolicy::default();
        let rebuilt = GenerationPolicy::new(
            d.min_length(),
            d.max_length(),
            d.classes(),
            DEFAULT_MAX_LENGTH,
        );
        assert_eq!(rebuilt, Ok(d));
    }
}
