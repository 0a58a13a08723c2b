//! Scripted adapters serving predetermined values, for deterministic tests.

pub mod clock;
pub mod random;

pub use clock::FixedClock;
pub use random::ScriptedRandomSource;
