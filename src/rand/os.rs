//! Operating system entropy via `getrandom`.

use zeroize::Zeroize;

use super::RandomSource;
use crate::exits;

/// Name of the entropy source, for diagnostics.
#[cfg(target_os = "linux")]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(not(target_os = "linux"))]
pub fn source_name() -> &'static str {
    "operating system CSPRNG"
}

/// Word source backed by the operating system CSPRNG.
///
/// There is no fallback: if the OS cannot supply bytes the process aborts.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    #[inline]
    pub fn new() -> Self {
        OsRandom
    }
}

impl RandomSource for OsRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        if let Err(err) = getrandom::fill(&mut buf) {
            exits::rng_failure(err);
        }
        let word = u32::from_ne_bytes(buf);
        buf.zeroize();
        word
    }
}
