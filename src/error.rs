use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Every variant carries the offending piece of the expression.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Expression is empty or contains only whitespace.
    #[error("empty spec string")]
    EmptyExpression,
    /// Expression doesn't consist of exactly six fields.
    #[error("expected exactly {expected} fields, found {found}: [{}]", .fields.join(" "))]
    FieldCount {
        /// Required number of fields.
        expected: usize,
        /// Number of fields found.
        found: usize,
        /// Fields as they were split.
        fields: Vec<String>,
    },
    /// Range item has more than one `-`.
    #[error("too many hyphens: {0}")]
    TooManyHyphens(String),
    /// Range item has more than one `/`.
    #[error("too many slashes: {0}")]
    TooManySlashes(String),
    /// Value is neither a known name nor an unsigned integer.
    #[error("failed to parse int from {value}: {reason}")]
    InvalidNumber {
        /// Unparsable text.
        value: String,
        /// Underlying parser message.
        reason: String,
    },
    /// Value is a negative integer.
    #[error("negative number ({value}) not allowed: {expr}")]
    NegativeNumber {
        /// Parsed value.
        value: i64,
        /// Range item containing the value.
        expr: String,
    },
    /// Wildcard is used as a start of a range, like `*-5`.
    #[error("wildcard can't start a range: {0}")]
    WildcardRange(String),
    /// Start of a range is less than the field's minimum.
    #[error("beginning of range ({value}) below minimum ({min}): {expr}")]
    BelowMinimum {
        /// Start of the range.
        value: u32,
        /// Field's minimum.
        min: u32,
        /// Range item.
        expr: String,
    },
    /// End of a range is greater than the field's maximum.
    #[error("end of range ({value}) above maximum ({max}): {expr}")]
    AboveMaximum {
        /// End of the range.
        value: u32,
        /// Field's maximum.
        max: u32,
        /// Range item.
        expr: String,
    },
    /// Start of a range is greater than its end.
    #[error("beginning of range ({start}) beyond end of range ({end}): {expr}")]
    RangeBeyondEnd {
        /// Start of the range.
        start: u32,
        /// End of the range.
        end: u32,
        /// Range item.
        expr: String,
    },
    /// Step is zero.
    #[error("step of range should be a positive number: {0}")]
    ZeroStep(String),
    /// Expression starts with `@` but isn't one of the known descriptors.
    #[error("unrecognized descriptor: {0}")]
    UnrecognizedDescriptor(String),
    /// Duration of the `@every` descriptor can't be parsed.
    #[error("failed to parse duration {descriptor}: {reason}")]
    InvalidDuration {
        /// Whole descriptor.
        descriptor: String,
        /// Underlying parser message.
        reason: String,
    },
    /// Unknown time zone in the `TZ=` prefix.
    #[error("invalid time zone: {0}")]
    InvalidTimeZone(String),
}
