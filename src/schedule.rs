use crate::{calendar::CalendarSchedule, interval::IntervalSchedule, zone::Zone, CronError, Result};
use chrono::{DateTime, TimeZone};
use std::{fmt::Display, str::FromStr, time::Duration};
use tracing::debug;

/// Number of fields in the classic expression.
const FIELDS_COUNT: usize = 6;
const EVERY_DESCRIPTOR: &str = "@every ";

/// Represents a compiled cron schedule with its methods.
///
/// For schedule format clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub enum Schedule {
    /// Six fields expression or one of the calendar descriptors.
    Calendar(CalendarSchedule),
    /// `@every <duration>` descriptor.
    Interval(IntervalSchedule),
}

impl Schedule {
    /// Compiles provided `expression` and constructs [`Schedule`] instance.
    ///
    /// Calendar fields are matched in the time zone of the instant passed to [`upcoming()`](Schedule::upcoming),
    /// unless the expression has a `TZ=` prefix.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is unparsable or has format errors.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        Self::with_zone(expression, Zone::default())
    }

    /// Same as [`new()`](Schedule::new), but calendar fields are matched in the provided `zone`.
    ///
    /// `TZ=` prefix of the expression takes precedence over `zone`.
    pub fn with_zone(expression: impl Into<String>, zone: impl Into<Zone>) -> Result<Self> {
        let expression = expression.into();
        Self::compile(&expression, zone.into())
            .inspect_err(|e| debug!(%expression, error = %e, "failed to compile cron expression"))
    }

    fn compile(expression: &str, zone: Zone) -> Result<Self> {
        let mut expression = expression.trim();
        let mut zone = zone;

        if expression.is_empty() {
            return Err(CronError::EmptyExpression);
        }

        // Parse and define TZ, if present
        if let Some((first, rest)) = expression.split_once(char::is_whitespace) {
            if let Some((key, name)) = first.split_once('=') {
                if key.eq_ignore_ascii_case("TZ") || key.eq_ignore_ascii_case("CRON_TZ") {
                    zone = Zone::from_name(name)?;
                    expression = rest.trim_start();
                }
            }
        }

        if expression.starts_with('@') {
            return Self::parse_descriptor(expression, zone);
        }

        let fields: Vec<&str> = expression.split_whitespace().collect();
        let fields: [&str; FIELDS_COUNT] = fields.try_into().map_err(|fields: Vec<&str>| CronError::FieldCount {
            expected: FIELDS_COUNT,
            found: fields.len(),
            fields: fields.into_iter().map(String::from).collect(),
        })?;

        Ok(Self::Calendar(CalendarSchedule::parse(fields, zone)?))
    }

    fn parse_descriptor(descriptor: &str, zone: Zone) -> Result<Self> {
        let schedule = match descriptor {
            "@yearly" | "@annually" => CalendarSchedule::yearly(zone),
            "@monthly" => CalendarSchedule::monthly(zone),
            "@weekly" => CalendarSchedule::weekly(zone),
            "@daily" | "@midnight" => CalendarSchedule::daily(zone),
            "@hourly" => CalendarSchedule::hourly(zone),
            _ => {
                let Some(duration) = descriptor.strip_prefix(EVERY_DESCRIPTOR) else {
                    return Err(CronError::UnrecognizedDescriptor(descriptor.to_owned()));
                };
                let duration = duration.trim();
                // negative delay is clamped to the minimal one
                let (negative, duration) = match duration.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, duration.strip_prefix('+').unwrap_or(duration)),
                };
                let delay = humantime::parse_duration(duration).map_err(|e| CronError::InvalidDuration {
                    descriptor: descriptor.to_owned(),
                    reason: e.to_string(),
                })?;
                let delay = if negative { Duration::ZERO } else { delay };

                return Ok(Self::Interval(IntervalSchedule::new(delay)));
            }
        };

        Ok(Self::Calendar(schedule))
    }

    /// Returns time of the upcoming event, strictly after the provided `current` value.
    ///
    /// The result is in the time zone of `current`.
    /// Returns `None` if there is no upcoming event within
    /// [`SEARCH_HORIZON_YEARS`](crate::calendar::SEARCH_HORIZON_YEARS).
    #[inline]
    pub fn upcoming<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Schedule::Calendar(schedule) => schedule.upcoming(current),
            Schedule::Interval(schedule) => schedule.upcoming(current),
        }
    }

    /// Returns iterator of events strictly after `current`.
    #[inline]
    pub fn iter<Tz: TimeZone>(&self, current: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.upcoming(current),
        }
    }

    /// Consumes [`Schedule`] and returns iterator of events strictly after `current`.
    #[inline]
    pub fn into_iter<Tz: TimeZone>(self, current: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> {
        let next = self.upcoming(current);
        ScheduleIterator { schedule: self, next }
    }
}

/// Contains iterator state.
#[derive(Debug, Clone)]
struct ScheduleIterator<Tz: TimeZone> {
    schedule: Schedule,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.upcoming(&current);
        Some(current)
    }
}

impl From<CalendarSchedule> for Schedule {
    fn from(value: CalendarSchedule) -> Self {
        Self::Calendar(value)
    }
}

impl From<IntervalSchedule> for Schedule {
    fn from(value: IntervalSchedule) -> Self {
        Self::Interval(value)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.to_string()
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schedule::Calendar(schedule) => schedule.fmt(f),
            Schedule::Interval(schedule) => schedule.fmt(f),
        }
    }
}
