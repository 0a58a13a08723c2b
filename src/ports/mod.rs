//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the minting core and an
//! external system (secure randomness, time). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod random;

pub use clock::Clock;
pub use random::RandomSource;
