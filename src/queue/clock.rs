//! Timestamp source for accepted entries.

use chrono::{DateTime, Utc};

/// Supplies the acceptance timestamp stamped on every pushed entry.
///
/// Ordering never depends on these timestamps; they are informational for
/// whoever consumes popped entries.
pub trait Clock {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
