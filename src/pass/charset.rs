//! Character set building for password generation.

use crate::settings::GenerationPolicy;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharClass {
    /// Every class, in charset order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }
}

/// Pool of eligible characters, all ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset(Vec<u8>);

impl Charset {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}

/// Concatenate the alphabets of the selected classes in fixed order.
/// Empty when the policy selects no class.
pub fn build(policy: &GenerationPolicy) -> Charset {
    let mut chars = Vec::with_capacity(size(policy));
    for class in policy.classes().iter() {
        chars.extend_from_slice(class.alphabet());
    }
    Charset(chars)
}

/// Size of the charset `build` would produce.
pub fn size(policy: &GenerationPolicy) -> usize {
    policy.classes().iter().map(|c| c.alphabet().len()).sum()
}
