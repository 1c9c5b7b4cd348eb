/// Common utility functions.
use crate::{CronError, Result};

/// Converts string into unsigned number.
///
/// Negative numbers are reported separately from unparsable input, `expr` is the enclosing range item.
pub(crate) fn parse_number(input: &str, expr: &str) -> Result<u32> {
    let value = input.parse::<i64>().map_err(|e| CronError::InvalidNumber {
        value: input.to_owned(),
        reason: e.to_string(),
    })?;

    if value < 0 {
        return Err(CronError::NegativeNumber {
            value,
            expr: expr.to_owned(),
        });
    }

    u32::try_from(value).map_err(|e| CronError::InvalidNumber {
        value: input.to_owned(),
        reason: e.to_string(),
    })
}

/// Converts string with mnemonic value representation into unsigned number.
pub(crate) fn parse_name(input: &str, names: &[(&str, u32)]) -> Option<u32> {
    names
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, value)| *value)
}

/// Resolves a name first, then falls back to a plain number.
#[inline]
pub(crate) fn parse_name_or_number(input: &str, names: &[(&str, u32)], expr: &str) -> Result<u32> {
    match parse_name(input, names) {
        Some(value) => Ok(value),
        None => parse_number(input, expr),
    }
}
