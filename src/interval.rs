use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use std::{fmt::Display, time::Duration};

/// Minimal supported delay, shorter ones are rounded up to it.
const RESOLUTION: Duration = Duration::from_secs(1);

/// Schedule which fires once every fixed delay, like `@every 1h30m`.
///
/// The delay is a whole number of seconds, at least one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalSchedule {
    delay: Duration,
}

impl IntervalSchedule {
    /// Constructs schedule which fires every `delay`.
    ///
    /// Delays shorter than a second are rounded up to one second, fractions of a second are truncated.
    pub fn new(delay: Duration) -> Self {
        let delay = delay.max(RESOLUTION);
        Self {
            delay: Duration::from_secs(delay.as_secs()),
        }
    }

    /// Delay between events.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns time of the event which follows `current`:
    /// `current` with dropped fraction of a second plus delay.
    ///
    /// Returns `None` on time overflow.
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let delay = TimeDelta::from_std(self.delay).ok()?;
        // leap second is represented as nanoseconds beyond 1_000_000_000
        let fraction = TimeDelta::nanoseconds(i64::from(current.nanosecond() % 1_000_000_000));

        current.clone().checked_sub_signed(fraction)?.checked_add_signed(delay)
    }
}

impl Display for IntervalSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@every {}", humantime::format_duration(self.delay))
    }
}
