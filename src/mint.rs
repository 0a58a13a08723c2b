//! Identifier minting over the random source and clock ports.

use uuid::Builder;

use crate::adapters::live::{LiveClock, LiveRandomSource};
use crate::ports::{Clock, RandomSource};

/// Bundles the two port trait objects and mints identifiers from them.
///
/// Every operation is a fresh draw against the injected ports; the minter
/// itself holds no mutable state and is safe to share across threads.
pub struct Minter {
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
}

impl Minter {
    /// Creates a minter over the given port implementations.
    #[must_use]
    pub fn new(random: Box<dyn RandomSource>, clock: Box<dyn Clock>) -> Self {
        Self { random, clock }
    }

    /// Creates a minter wired to the OS RNG and the system clock.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveRandomSource), Box::new(LiveClock))
    }

    /// Mints a 24-char lowercase hex token from 12 secure random bytes.
    ///
    /// A non-empty `prefix` is prepended as `"<prefix>_<hex>"`; an empty
    /// prefix yields the bare hex string.
    #[must_use]
    pub fn generate(&self, prefix: &str) -> String {
        let mut bytes = [0u8; 12];
        self.random.fill_bytes(&mut bytes);
        let hex = hex::encode(bytes);
        if prefix.is_empty() {
            hex
        } else {
            format!("{prefix}_{hex}")
        }
    }

    /// Mints a 12-char lowercase hex token from 6 secure random bytes.
    ///
    /// Half the collision resistance of [`generate`](Self::generate); meant for
    /// human-facing short codes, not security-critical identifiers.
    #[must_use]
    pub fn short(&self) -> String {
        let mut bytes = [0u8; 6];
        self.random.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Mints a version-4 UUID in canonical hyphenated lowercase form.
    ///
    /// The 16 random bytes come from the same random source port as every
    /// other operation; only the version and variant bits are stamped on.
    #[must_use]
    pub fn uuid(&self) -> String {
        let mut bytes = [0u8; 16];
        self.random.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    /// Mints a `"<epoch-millis>-<hex8>"` identifier.
    ///
    /// The millisecond prefix makes identifiers lexically sortable by time;
    /// the 4 random bytes break ties within a millisecond. Uniqueness is
    /// not guaranteed if both parts collide (~2^-32 per shared millisecond).
    #[must_use]
    pub fn timestamp(&self) -> String {
        let millis = self.clock.now().timestamp_millis();
        let mut bytes = [0u8; 4];
        self.random.fill_bytes(&mut bytes);
        format!("{millis}-{}", hex::encode(bytes))
    }
}

/// Mints a hex token via a live minter. See [`Minter::generate`].
#[must_use]
pub fn generate(prefix: &str) -> String {
    Minter::live().generate(prefix)
}

/// Mints a short hex code via a live minter. See [`Minter::short`].
#[must_use]
pub fn short() -> String {
    Minter::live().short()
}

/// Mints a version-4 UUID via a live minter. See [`Minter::uuid`].
#[must_use]
pub fn uuid() -> String {
    Minter::live().uuid()
}

/// Mints a timestamp identifier via a live minter. See [`Minter::timestamp`].
#[must_use]
pub fn timestamp() -> String {
    Minter::live().timestamp()
}
