//! Random source port for drawing secure random bytes.

/// Provides cryptographically secure random bytes.
///
/// Abstracting the random source allows deterministic tests by substituting
/// a scripted byte sequence while production uses the operating system RNG.
pub trait RandomSource: Send + Sync {
    /// Fills `buf` entirely with cryptographically secure random bytes.
    ///
    /// Failure of the underlying platform source is unrecoverable:
    /// implementations panic rather than fall back to weaker randomness.
    fn fill_bytes(&self, buf: &mut [u8]);
}
