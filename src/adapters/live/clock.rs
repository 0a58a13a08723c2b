//! Live adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Live clock reading the system wall clock.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
