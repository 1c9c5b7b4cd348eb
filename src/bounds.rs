/// Valid values range and optional mnemonic names of a single schedule field.
///
/// `max` can't exceed 63, since every value of the field is a bit of the `u64` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Minimum valid value.
    pub min: u32,
    /// Maximum valid value.
    pub max: u32,
    /// Lowercase names and their values.
    pub names: &'static [(&'static str, u32)],
}

impl Bounds {
    /// Constructs bounds without names.
    ///
    /// Panics if `min > max` or `max > 63`.
    pub const fn new(min: u32, max: u32) -> Self {
        Self::with_names(min, max, &[])
    }

    /// Constructs bounds with a names table.
    ///
    /// Panics if `min > max` or `max > 63`.
    pub const fn with_names(min: u32, max: u32, names: &'static [(&'static str, u32)]) -> Self {
        assert!(min <= max, "min value is greater than max value");
        assert!(max < u64::BITS, "max value doesn't fit into the mask");

        Self { min, max, names }
    }
}

/// Seconds: 0-59.
pub const SECONDS: Bounds = Bounds::new(0, 59);
/// Minutes: 0-59.
pub const MINUTES: Bounds = Bounds::new(0, 59);
/// Hours: 0-23.
pub const HOURS: Bounds = Bounds::new(0, 23);
/// Days of month: 1-31.
pub const DAYS_OF_MONTH: Bounds = Bounds::new(1, 31);
/// Months: 1-12 or JAN-DEC.
pub const MONTHS: Bounds = Bounds::with_names(
    1,
    12,
    &[
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("may", 5),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ],
);
/// Days of week: 0-6 or SUN-SAT.
pub const DAYS_OF_WEEK: Bounds = Bounds::with_names(
    0,
    6,
    &[
        ("sun", 0),
        ("mon", 1),
        ("tue", 2),
        ("wed", 3),
        ("thu", 4),
        ("fri", 5),
        ("sat", 6),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SECONDS, 0, 59)]
    #[case(MINUTES, 0, 59)]
    #[case(HOURS, 0, 23)]
    #[case(DAYS_OF_MONTH, 1, 31)]
    #[case(MONTHS, 1, 12)]
    #[case(DAYS_OF_WEEK, 0, 6)]
    fn test_registry_ranges(#[case] bounds: Bounds, #[case] min: u32, #[case] max: u32) {
        assert_eq!((bounds.min, bounds.max), (min, max));
        for (name, value) in bounds.names {
            assert_eq!(name.to_lowercase(), *name, "names must be lowercase");
            assert!((min..=max).contains(value), "{name} = {value} is out of bounds");
        }
    }

    #[test]
    fn test_names_tables() {
        assert_eq!(MONTHS.names.len(), 12);
        assert_eq!(DAYS_OF_WEEK.names.len(), 7);
        assert!(SECONDS.names.is_empty());
        assert!(DAYS_OF_MONTH.names.is_empty());
    }

    #[test]
    #[should_panic(expected = "min value is greater than max value")]
    fn test_inverted_bounds() {
        Bounds::new(5, 3);
    }

    #[test]
    #[should_panic(expected = "max value doesn't fit into the mask")]
    fn test_too_wide_bounds() {
        Bounds::new(0, 64);
    }
}
