use crate::{CronError, Result};
use std::fmt::Display;
#[cfg(feature = "tz")]
use std::str::FromStr;

/// Time zone which calendar schedule's fields are matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// Time zone of the instant passed to [`upcoming()`](crate::Schedule::upcoming).
    #[default]
    Inherited,
    /// Coordinated Universal Time.
    Utc,
    /// Time zone from the IANA database.
    #[cfg(feature = "tz")]
    Named(chrono_tz::Tz),
}

impl Zone {
    /// Resolves time zone by its name.
    ///
    /// `UTC` is always known, other names are accepted if `tz` feature is enabled.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("UTC") {
            return Ok(Self::Utc);
        }

        #[cfg(feature = "tz")]
        if let Ok(tz) = chrono_tz::Tz::from_str(name) {
            return Ok(Self::Named(tz));
        }

        Err(CronError::InvalidTimeZone(name.to_owned()))
    }
}

#[cfg(feature = "tz")]
impl From<chrono_tz::Tz> for Zone {
    fn from(value: chrono_tz::Tz) -> Self {
        if value == chrono_tz::UTC {
            Self::Utc
        } else {
            Self::Named(value)
        }
    }
}

impl From<chrono::Utc> for Zone {
    fn from(_: chrono::Utc) -> Self {
        Self::Utc
    }
}

/// Name of the zone, empty for [`Zone::Inherited`].
impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Inherited => Ok(()),
            Zone::Utc => write!(f, "UTC"),
            #[cfg(feature = "tz")]
            Zone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UTC")]
    #[case("utc")]
    fn test_utc_is_always_known(#[case] name: &str) {
        assert_eq!(Zone::from_name(name), Ok(Zone::Utc));
        assert_eq!(Zone::from_name(name).unwrap().to_string(), "UTC");
    }

    #[rstest]
    #[case("")]
    #[case("Aaa/Bbb")]
    #[case("+02:00")]
    fn test_unknown_names(#[case] name: &str) {
        assert_eq!(Zone::from_name(name), Err(CronError::InvalidTimeZone(name.to_owned())));
    }

    #[test]
    fn test_default_is_inherited() {
        assert_eq!(Zone::default(), Zone::Inherited);
        assert_eq!(Zone::Inherited.to_string(), "");
        assert_eq!(Zone::from(chrono::Utc), Zone::Utc);
    }

    #[cfg(feature = "tz")]
    #[rstest]
    #[case("Europe/Kyiv", chrono_tz::Europe::Kyiv)]
    #[case("US/Pacific", chrono_tz::US::Pacific)]
    #[case("EET", chrono_tz::EET)]
    fn test_named_zones(#[case] name: &str, #[case] expected: chrono_tz::Tz) {
        let zone = Zone::from_name(name).unwrap();
        assert_eq!(zone, Zone::Named(expected));
        assert_eq!(zone, Zone::from(expected));
        assert_eq!(zone.to_string(), name);
    }

    #[cfg(feature = "tz")]
    #[test]
    fn test_named_utc_is_utc() {
        let zone = Zone::from(chrono_tz::UTC);
        assert_eq!(zone, Zone::Utc);
        assert_eq!(Zone::from_name(&zone.to_string()), Ok(zone));
    }
}
