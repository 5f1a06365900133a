//! Testability port for injecting time.

use chrono::{DateTime, Utc};

pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}
