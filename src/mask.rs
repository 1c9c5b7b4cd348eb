use crate::{bounds::Bounds, series, utils, CronError, Result};
use std::fmt::Display;

/// Compiled value of a single schedule field.
///
/// Bit `i` of the mask is set if value `i` is allowed.
/// The wildcard flag is kept apart from the bits: it's set by a bare `*` or `?` only
/// and isn't implied by a mask which just happens to have every value enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldMask {
    bits: u64,
    wildcard: bool,
}

impl FieldMask {
    /// Compiles a field: comma-separated list of `atom[-atom][/step]` items,
    /// where `atom` is `*`, `?`, a number or one of the `bounds` names.
    ///
    /// Returns the first [`CronError`] met, remaining items aren't parsed.
    pub fn parse(input: &str, bounds: &Bounds) -> Result<Self> {
        input
            .split(',')
            .try_fold(Self::default(), |mask, expr| Ok(mask.union(Self::parse_range(expr, bounds)?)))
    }

    /// Every value within `bounds`, marked as wildcard.
    pub fn all(bounds: &Bounds) -> Self {
        Self {
            bits: series::bits(bounds.min, bounds.max, 1),
            wildcard: true,
        }
    }

    /// Exactly one value.
    ///
    /// Panics if `value` doesn't fit into the mask.
    pub fn single(value: u32) -> Self {
        assert!(value < u64::BITS, "value doesn't fit into the mask");
        Self {
            bits: 1 << value,
            wildcard: false,
        }
    }

    /// Raw mask of allowed values.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Returns `true` if the field was specified as `*` or `?`.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Returns `true` if `value` is allowed.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value < u64::BITS && self.bits & (1 << value) != 0
    }

    /// Returns the smallest allowed value which is greater or equal to `value`.
    #[inline]
    pub fn next_from(&self, value: u32) -> Option<u32> {
        if value >= u64::BITS {
            return None;
        }

        let rest = self.bits & (u64::MAX << value);
        (rest != 0).then(|| rest.trailing_zeros())
    }

    /// Iterator over allowed values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = u32> {
        let bits = self.bits;
        (0..u64::BITS).filter(move |v| bits & (1 << v) != 0)
    }

    /// Number of allowed values.
    #[inline]
    pub fn len(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if no value is allowed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            wildcard: self.wildcard || other.wildcard,
        }
    }

    /// Parses single `range_expr` of the list.
    fn parse_range(expr: &str, bounds: &Bounds) -> Result<Self> {
        let range_and_step: Vec<&str> = expr.split('/').collect();
        let low_and_high: Vec<&str> = range_and_step[0].split('-').collect();
        let single_value = low_and_high.len() == 1;
        let mut wildcard = false;

        let (start, mut end) = if low_and_high[0] == "*" || low_and_high[0] == "?" {
            if !single_value {
                return Err(CronError::WildcardRange(expr.to_owned()));
            }
            wildcard = true;
            (bounds.min, bounds.max)
        } else {
            let start = utils::parse_name_or_number(low_and_high[0], bounds.names, expr)?;
            match low_and_high.len() {
                1 => (start, start),
                2 => (start, utils::parse_name_or_number(low_and_high[1], bounds.names, expr)?),
                _ => return Err(CronError::TooManyHyphens(expr.to_owned())),
            }
        };

        let step = match range_and_step.len() {
            1 => 1,
            2 => {
                let step = utils::parse_number(range_and_step[1], expr)?;
                // `N/step` means `N-max/step`
                if single_value {
                    end = bounds.max;
                }
                if step > 1 {
                    wildcard = false;
                }
                step
            }
            _ => return Err(CronError::TooManySlashes(expr.to_owned())),
        };

        if start < bounds.min {
            return Err(CronError::BelowMinimum {
                value: start,
                min: bounds.min,
                expr: expr.to_owned(),
            });
        }
        if end > bounds.max {
            return Err(CronError::AboveMaximum {
                value: end,
                max: bounds.max,
                expr: expr.to_owned(),
            });
        }
        if start > end {
            return Err(CronError::RangeBeyondEnd {
                start,
                end,
                expr: expr.to_owned(),
            });
        }
        if step == 0 {
            return Err(CronError::ZeroStep(expr.to_owned()));
        }

        Ok(Self {
            bits: series::bits(start, end, step),
            wildcard,
        })
    }
}

/// Canonical form: `*` for wildcards, otherwise a list of values and ranges, like `0-4,10,12`.
impl Display for FieldMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.wildcard {
            return write!(f, "*");
        }

        let mut values = self.values().peekable();
        let mut separator = "";
        while let Some(start) = values.next() {
            let mut end = start;
            while let Some(next) = values.next_if_eq(&(end + 1)) {
                end = next;
            }

            match end - start {
                0 => write!(f, "{separator}{start}")?,
                1 => write!(f, "{separator}{start},{end}")?,
                _ => write!(f, "{separator}{start}-{end}")?,
            }
            separator = ",";
        }

        Ok(())
    }
}
