//! Password generation.

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use super::charset;
use crate::error::PolicyError;
use crate::rand::RandomSource;
use crate::settings::GenerationPolicy;

/// A generated password. Its buffer is wiped when dropped.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate a single password for `policy`.
///
/// The length is drawn uniformly from `[min_length, max_length]`, then every
/// position independently and uniformly from the policy's charset. There is
/// no "at least one of each class" rule; sampling stays uniform.
pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<Password, PolicyError>
where
    R: RandomSource + ?Sized,
{
    let chars = charset::build(policy);
    if chars.is_empty() {
        return Err(PolicyError::NoCharacterClass);
    }

    let length = rng.uniform(policy.min_length(), policy.max_length());
    debug!(
        "generating {} characters from a {}-character set",
        length,
        chars.len()
    );

    let last = chars.len() - 1;
    let pass: String = (0..length)
        .map(|_| random_char(chars.as_bytes(), rng.uniform(0, last)))
        .collect();
    Ok(Password(pass))
}

#[inline]
fn random_char(chars: &[u8], index: usize) -> char {
    char::from(chars[index])
}
