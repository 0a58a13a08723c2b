//! Live adapters for real external interactions.

pub mod clock;
pub mod random;

pub use clock::LiveClock;
pub use random::LiveRandomSource;
