//! Source of "now" for day-count computation.
//!
//! Nothing in the core reads the system clock directly; callers hand in a
//! [`Clock`] (or a plain `NaiveDate`) so day counts are deterministic.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Start of the next local calendar day.
    fn next_midnight(&self) -> NaiveDateTime {
        let today = self.today();
        today
            .succ_opt()
            .unwrap_or(today)
            .and_time(NaiveTime::MIN)
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, used by tests and by `--today` overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pin the clock to midnight of `day`.
    pub fn on(day: NaiveDate) -> Self {
        Self(day.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
