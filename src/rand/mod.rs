//! Uniform integer sampling over the operating system CSPRNG.

mod os;

pub use os::{OsRandom, source_name};

/// A source of uniformly distributed 32-bit words.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Returns a value in `[min, max]`, both ends inclusive.
    ///
    /// One 32-bit word is drawn and reduced with `min + word % span`, where
    /// `span = max - min + 1`. The reduction is not perfectly uniform: the
    /// first `2^32 mod span` values of the range are produced by one extra
    /// word each, so they occur with probability `(⌊2^32/span⌋ + 1) / 2^32`
    /// instead of `⌊2^32/span⌋ / 2^32`. For the spans used here (at most
    /// 101) that excess is below `2.4e-8` relative. Spans wider than `2^32`
    /// can only reach the first `2^32` values.
    ///
    /// `min == max` returns `min` without drawing a word.
    fn uniform(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max, "uniform: min {min} > max {max}");
        if min >= max {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (u64::from(self.next_u32()) % span) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Replays a fixed list of words, cycling when exhausted.
#[cfg(test)]
pub(crate) struct Scripted {
    words: Vec<u32>,
    pos: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(words: &[u32]) -> Self {
        assert!(!words.is_empty());
        Scripted {
            words: words.to_vec(),
            pos: 0,
        }
    }

    pub(crate) fn drawn(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.pos % self.words.len()];
        self.pos += 1;
        word
    }
}
