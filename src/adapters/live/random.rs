//! Live adapter for the `RandomSource` port.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::ports::RandomSource;

/// Live random source backed by the operating system RNG.
pub struct LiveRandomSource;

impl LiveRandomSource {
    /// Creates a new live random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LiveRandomSource {
    fn fill_bytes(&self, buf: &mut [u8]) {
        // OsRng panics if the platform source is unavailable, which is the
        // required propagation: no retry, no weaker fallback.
        OsRng.fill_bytes(buf);
    }
}
