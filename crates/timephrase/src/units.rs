//! The shared unit table.
//!
//! Both grammars resolve unit tokens to a fixed per-unit [`Duration`]. Days,
//! weeks, months and years are fixed-length approximations, not calendar
//! units: a month is always 31 days and a year is always 365 days.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::Duration;

use crate::error::{PhraseError, Result};

const NANOSECOND: i64 = 1;
const MICROSECOND: i64 = 1_000 * NANOSECOND;
const MILLISECOND: i64 = 1_000 * MICROSECOND;
const SECOND: i64 = 1_000 * MILLISECOND;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 31 * DAY;
const YEAR: i64 = 365 * DAY;

/// Lower-case unit names (singular and plural) accepted by the
/// natural-language grammar, mapped to the duration of one unit.
///
/// ```
/// use timephrase::UNITS;
///
/// assert_eq!(UNITS["week"], chrono::Duration::days(7));
/// assert_eq!(UNITS["months"], chrono::Duration::days(31));
/// ```
pub static UNITS: LazyLock<HashMap<&'static str, Duration>> = LazyLock::new(|| {
    [
        ("nanosecond", NANOSECOND),
        ("nanoseconds", NANOSECOND),
        ("microsecond", MICROSECOND),
        ("microseconds", MICROSECOND),
        ("millisecond", MILLISECOND),
        ("milliseconds", MILLISECOND),
        ("second", SECOND),
        ("seconds", SECOND),
        ("minute", MINUTE),
        ("minutes", MINUTE),
        ("hour", HOUR),
        ("hours", HOUR),
        ("day", DAY),
        ("days", DAY),
        ("week", WEEK),
        ("weeks", WEEK),
        ("month", MONTH),
        ("months", MONTH),
        ("year", YEAR),
        ("years", YEAR),
    ]
    .into_iter()
    .map(|(name, nanos)| (name, Duration::nanoseconds(nanos)))
    .collect()
});

/// Look up a natural-language unit name. Matching is exact; callers
/// lower-case first.
pub fn unit_duration(name: &str) -> Option<Duration> {
    UNITS.get(name).copied()
}

/// Look up a shorthand unit abbreviation. Case-sensitive: `M` is a month,
/// `m` is a minute.
pub fn shorthand_unit(abbreviation: &str) -> Option<Duration> {
    let nanos = match abbreviation {
        "ns" => NANOSECOND,
        "us" => MICROSECOND,
        "ms" => MILLISECOND,
        "s" => SECOND,
        "m" => MINUTE,
        "h" => HOUR,
        "D" => DAY,
        "W" => WEEK,
        "M" => MONTH,
        "Y" => YEAR,
        _ => return None,
    };
    Some(Duration::nanoseconds(nanos))
}

/// Multiply `unit` by the decimal `count`, failing with
/// [`PhraseError::Overflow`] when the count or the product leaves the signed
/// 64-bit nanosecond range.
///
/// `count` must be a non-empty run of ASCII digits; both grammars check this
/// before calling, so a parse failure here can only be overflow.
pub(crate) fn scale(count: &str, unit: Duration, phrase: &str) -> Result<Duration> {
    let n: i64 = count.parse().map_err(|_| PhraseError::overflow(phrase))?;
    unit.num_nanoseconds()
        .and_then(|per_unit| per_unit.checked_mul(n))
        .map(Duration::nanoseconds)
        .ok_or_else(|| PhraseError::overflow(phrase))
}

/// Whether `s` is one or more ASCII digits.
pub(crate) fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
