//! Clock abstraction for admission timestamps.

use chrono::{DateTime, SubsecRound, Utc};

/// Source of the current time.
///
/// Admission stamps bids with `now()`; tests substitute a [`FixedClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to microseconds.
///
/// PostgreSQL `TIMESTAMPTZ` keeps microseconds, so truncating here means the
/// stamped value and the stored value are identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
