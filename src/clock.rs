use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Source of the current instant
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
