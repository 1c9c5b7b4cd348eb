//! Bit-mask cron expression compiler and next-occurrence calculator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - compile six-field cron expressions (with seconds) and well-known descriptors into compact bit-mask schedules;
//! - calculate the next occurrence of the schedule after any given instant, honoring time zones and DST transitions.
//!
//! _This is not a cron jobs scheduler or runner._ It only answers the question "when is the next event?".
//!
//! ## Cron expression format
//!
//! Expression consists of exactly six whitespace-separated fields: seconds, minutes, hours, days of month,
//! months and days of week.
//!
//! | Field        | Allowed values  | Allowed special characters |
//! |--------------|-----------------|----------------------------|
//! | Seconds      | 0-59            | * , - /                    |
//! | Minutes      | 0-59            | * , - /                    |
//! | Hours        | 0-23            | * , - /                    |
//! | Day of Month | 1-31            | * , - / ?                  |
//! | Month        | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | 0-6 or SUN-SAT  | * , - / ?                  |
//!
//! Patterns meanings:
//! - `*` or `?` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5` (same as `10-59/5`), `30-59/2`.
//!
//! Month and day of week names are three-letter English abbreviations, case-insensitive.
//!
//! If both day of month and day of week are restricted (neither starts with `*` or `?`),
//! a day matches when _either_ of them matches, i.e. `0 0 0 1,15 * MON` fires on the 1st, the 15th and every Monday.
//!
//! Also, short aliases for well-known schedule expressions are allowed:
//!
//! | Alias                      | Expression    |
//! |----------------------------|---------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 *   |
//! | `@monthly`                 | 0 0 0 1 * *   |
//! | `@weekly`                  | 0 0 0 * * 0   |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * *   |
//! | `@hourly`                  | 0 0 * * * *   |
//! | `@every <duration>`        | fixed delay   |
//!
//! `@every` accepts [humantime](https://docs.rs/humantime) durations, i.e. `@every 90s`, `@every 1h30m`, `@every 2h 15m`.
//! Such a schedule fires at the current instant, with dropped fraction of a second, plus the delay.
//! Delays below one second are rounded up to one second.
//!
//! ### Schedule with timezone
//!
//! Calendar fields are matched in the time zone of the instant passed to [`upcoming()`](Schedule::upcoming)
//! unless another zone is specified with [`Schedule::with_zone()`] or with a prefix of the expression:
//! - `TZ=UTC 0 0 12 * * *`
//! - `CRON_TZ=Europe/Paris @monthly` (requires `tz` feature)
//!
//! On daylight saving time transitions, wall clock time which doesn't exist is skipped,
//! and wall clock time which occurs twice fires once, at its first occurrence.
//!
//! Search for the next event is limited by [`SEARCH_HORIZON_YEARS`], so schedules like `0 0 0 30 2 *`
//! produce no events instead of searching forever.
//!
//! ## How to use
//!
//! The main entity of the crate is a [`Schedule`], which has three basic methods:
//! - [new()](Schedule::new): constructor to compile and validate provided expression;
//! - [upcoming()](Schedule::upcoming): returns time of the next schedule's event, strictly after the provided timestamp;
//! - [iter()](Schedule::iter): returns an `Iterator` which produces a series of timestamps according to the schedule.
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::{DateTime, Utc};
//! use cron_mask::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("0 30 9 * * MON-FRI")?;
//!     let now = DateTime::parse_from_rfc3339("2024-01-06T12:00:00Z").unwrap().with_timezone(&Utc);
//!
//!     // Get the next event's timestamp after now
//!     let next = schedule.upcoming(&now);
//!     assert_eq!(next.unwrap().to_rfc3339(), "2024-01-08T09:30:00+00:00");
//!
//!     Ok(())
//! }
//! # upcoming().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::{DateTime, Utc};
//! use cron_mask::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule: Schedule = "@every 1h30m".parse()?;
//!     let now = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
//!
//!     // Get the next 10 timestamps after now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].
//! * `tz`: enables support of IANA [time zones](#schedule-with-timezone) besides `UTC`.

/// Value ranges and names of the expression fields.
pub mod bounds;
/// Six-field calendar schedule and the next occurrence search.
pub mod calendar;
/// Crate specific Error implementation.
pub mod error;
/// Fixed delay schedule.
pub mod interval;
/// Compiled field of the expression.
pub mod mask;
/// Cron expression compiler and upcoming event generator.
pub mod schedule;
mod series;
mod utils;
/// Time zone of the calendar schedule.
pub mod zone;

// Re-export of public entities.
pub use bounds::Bounds;
pub use calendar::{CalendarSchedule, SEARCH_HORIZON_YEARS};
pub use error::CronError;
pub use interval::IntervalSchedule;
pub use mask::FieldMask;
pub use schedule::Schedule;
pub use zone::Zone;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
