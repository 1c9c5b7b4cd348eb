use crate::{
    bounds::{DAYS_OF_MONTH, DAYS_OF_WEEK, HOURS, MINUTES, MONTHS, SECONDS},
    mask::FieldMask,
    zone::Zone,
    Result,
};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
use std::fmt::Display;
use tracing::{debug, trace};

/// How many years after the starting point the search looks for a matching time.
pub const SEARCH_HORIZON_YEARS: i32 = 5;

/// Schedule defined by six cron fields: second, minute, hour, day of month, month and day of week.
///
/// Fields are matched against wall clock time in the schedule's [`Zone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarSchedule {
    second: FieldMask,
    minute: FieldMask,
    hour: FieldMask,
    dom: FieldMask,
    month: FieldMask,
    dow: FieldMask,
    zone: Zone,
}

impl CalendarSchedule {
    /// Compiles six fields, in the order of the classic expression.
    ///
    /// The first field error is returned, the remaining fields aren't parsed.
    pub fn parse(fields: [&str; 6], zone: Zone) -> Result<Self> {
        let [second, minute, hour, dom, month, dow] = fields;

        Ok(Self {
            second: FieldMask::parse(second, &SECONDS)?,
            minute: FieldMask::parse(minute, &MINUTES)?,
            hour: FieldMask::parse(hour, &HOURS)?,
            dom: FieldMask::parse(dom, &DAYS_OF_MONTH)?,
            month: FieldMask::parse(month, &MONTHS)?,
            dow: FieldMask::parse(dow, &DAYS_OF_WEEK)?,
            zone,
        })
    }

    /// `0 0 0 1 1 *`
    pub(crate) fn yearly(zone: Zone) -> Self {
        Self {
            dom: FieldMask::single(DAYS_OF_MONTH.min),
            month: FieldMask::single(MONTHS.min),
            ..Self::daily(zone)
        }
    }

    /// `0 0 0 1 * *`
    pub(crate) fn monthly(zone: Zone) -> Self {
        Self {
            dom: FieldMask::single(DAYS_OF_MONTH.min),
            ..Self::daily(zone)
        }
    }

    /// `0 0 0 * * 0`
    pub(crate) fn weekly(zone: Zone) -> Self {
        Self {
            dow: FieldMask::single(DAYS_OF_WEEK.min),
            ..Self::daily(zone)
        }
    }

    /// `0 0 0 * * *`
    pub(crate) fn daily(zone: Zone) -> Self {
        Self {
            hour: FieldMask::single(HOURS.min),
            ..Self::hourly(zone)
        }
    }

    /// `0 0 * * * *`
    pub(crate) fn hourly(zone: Zone) -> Self {
        Self {
            second: FieldMask::single(SECONDS.min),
            minute: FieldMask::single(MINUTES.min),
            hour: FieldMask::all(&HOURS),
            dom: FieldMask::all(&DAYS_OF_MONTH),
            month: FieldMask::all(&MONTHS),
            dow: FieldMask::all(&DAYS_OF_WEEK),
            zone,
        }
    }

    /// Seconds field.
    pub fn second(&self) -> &FieldMask {
        &self.second
    }

    /// Minutes field.
    pub fn minute(&self) -> &FieldMask {
        &self.minute
    }

    /// Hours field.
    pub fn hour(&self) -> &FieldMask {
        &self.hour
    }

    /// Day of month field.
    pub fn day_of_month(&self) -> &FieldMask {
        &self.dom
    }

    /// Month field.
    pub fn month(&self) -> &FieldMask {
        &self.month
    }

    /// Day of week field.
    pub fn day_of_week(&self) -> &FieldMask {
        &self.dow
    }

    /// Time zone the fields are matched in.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Returns time of the first event strictly after `current`.
    ///
    /// `current` is converted into the schedule's zone for the search, the result is converted back.
    /// Returns `None` if nothing matches within [`SEARCH_HORIZON_YEARS`].
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match &self.zone {
            Zone::Inherited => self.upcoming_in(current),
            Zone::Utc => self
                .upcoming_in(&current.with_timezone(&Utc))
                .map(|dt| dt.with_timezone(&current.timezone())),
            #[cfg(feature = "tz")]
            Zone::Named(tz) => self
                .upcoming_in(&current.with_timezone(tz))
                .map(|dt| dt.with_timezone(&current.timezone())),
        }
    }

    /// Searches in the time zone of `current`.
    ///
    /// Wall clock time which occurs twice resolves to the earliest occurrence after `current`,
    /// wall clock time which doesn't exist is skipped.
    fn upcoming_in<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let tz = current.timezone();
        let mut from = current
            .naive_local()
            .with_nanosecond(0)?
            .checked_add_signed(TimeDelta::seconds(1))?;
        let horizon = from.year() + SEARCH_HORIZON_YEARS;

        loop {
            let candidate = self.search(from, horizon)?;
            let resolved = tz.from_local_datetime(&candidate);
            let earliest = resolved.clone().earliest();
            let latest = resolved.latest();

            if earliest.is_none() {
                trace!(?candidate, "skipping nonexistent local time");
            }
            if let Some(found) = earliest.into_iter().chain(latest).find(|dt| dt > current) {
                return Some(found);
            }

            from = candidate.checked_add_signed(TimeDelta::seconds(1))?;
        }
    }

    /// Returns the first wall clock time, starting from `from` (inclusively), which matches all fields.
    ///
    /// Every field jumps to its next allowed value, resetting all the lower fields,
    /// overflow of a field restarts matching from the month.
    fn search(&self, from: NaiveDateTime, horizon: i32) -> Option<NaiveDateTime> {
        let mut t = from;

        'wrap: loop {
            if t.year() > horizon {
                debug!(%horizon, "no matching time found within search horizon");
                return None;
            }

            if !self.month.contains(t.month()) {
                t = match self.month.next_from(t.month()) {
                    Some(month) => start_of_day(NaiveDate::from_ymd_opt(t.year(), month, 1)?),
                    None => start_of_day(NaiveDate::from_ymd_opt(t.year() + 1, 1, 1)?),
                };
                continue 'wrap;
            }

            while !self.day_matches(t.date()) {
                t = start_of_day(t.date().succ_opt()?);
                if t.day() == 1 {
                    continue 'wrap;
                }
            }

            if !self.hour.contains(t.hour()) {
                t = match self.hour.next_from(t.hour()) {
                    Some(hour) => t.date().and_hms_opt(hour, 0, 0)?,
                    None => start_of_day(t.date().succ_opt()?),
                };
                continue 'wrap;
            }

            if !self.minute.contains(t.minute()) {
                t = match self.minute.next_from(t.minute()) {
                    Some(minute) => t.date().and_hms_opt(t.hour(), minute, 0)?,
                    None => t
                        .date()
                        .and_hms_opt(t.hour(), 0, 0)?
                        .checked_add_signed(TimeDelta::hours(1))?,
                };
                continue 'wrap;
            }

            if !self.second.contains(t.second()) {
                t = match self.second.next_from(t.second()) {
                    Some(second) => t.with_second(second)?,
                    None => t.with_second(0)?.checked_add_signed(TimeDelta::minutes(1))?,
                };
                continue 'wrap;
            }

            return Some(t);
        }
    }

    /// Returns `true` if wall clock `time` matches all fields.
    pub fn matches(&self, time: &NaiveDateTime) -> bool {
        self.month.contains(time.month())
            && self.day_matches(time.date())
            && self.hour.contains(time.hour())
            && self.minute.contains(time.minute())
            && self.second.contains(time.second())
    }

    /// Day of month and day of week are OR-ed unless one of them is a wildcard.
    fn day_matches(&self, date: NaiveDate) -> bool {
        let dom = self.dom.contains(date.day());
        let dow = self.dow.contains(date.weekday().num_days_from_sunday());

        if self.dom.is_wildcard() || self.dow.is_wildcard() {
            dom && dow
        } else {
            dom || dow
        }
    }
}

#[inline]
fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl Display for CalendarSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.zone != Zone::Inherited {
            write!(f, "TZ={} ", self.zone)?;
        }
        write!(
            f,
            "{} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}
