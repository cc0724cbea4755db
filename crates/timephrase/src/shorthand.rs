//! Compact shorthand: an optional sign, a digit run and a unit abbreviation,
//! with no whitespace anywhere (`11h`, `-33us`, `+1Y`).
//!
//! | Abbreviation | Unit        |
//! |--------------|-------------|
//! | `ns`         | nanosecond  |
//! | `us`         | microsecond |
//! | `ms`         | millisecond |
//! | `s`          | second      |
//! | `m`          | minute      |
//! | `h`          | hour        |
//! | `D`          | day         |
//! | `W`          | week        |
//! | `M`          | month       |
//! | `Y`          | year        |
//!
//! A shorthand value has no anchor, so it always classifies as
//! [`PhraseType::Interval`](crate::PhraseType::Interval).

use tracing::trace;

use crate::error::{PhraseError, Result};
use crate::phrase::ParsedPhrase;
use crate::units::{is_digits, scale, shorthand_unit};

/// Parse a shorthand phrase such as `"-5ms"` or `"12m"`.
///
/// # Errors
///
/// Returns [`PhraseError::InvalidFormat`] if the phrase is not exactly
/// `[+-]?<digits><letters>` or the letters are not a known abbreviation, and
/// [`PhraseError::Overflow`] if the value does not fit in signed 64-bit
/// nanoseconds.
///
/// # Examples
///
/// ```
/// use timephrase::{parse_shorthand, PhraseType};
///
/// let parsed = parse_shorthand("-33us").unwrap();
/// assert_eq!(parsed.duration, -chrono::Duration::microseconds(33));
/// assert_eq!(parsed.phrase_type, PhraseType::Interval);
/// ```
pub fn parse_shorthand(phrase: &str) -> Result<ParsedPhrase> {
    let (negative, rest) = match phrase.as_bytes().first() {
        Some(b'+') => (false, &phrase[1..]),
        Some(b'-') => (true, &phrase[1..]),
        _ => (false, phrase),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (count, abbreviation) = rest.split_at(digits_end);

    if !is_digits(count)
        || abbreviation.is_empty()
        || !abbreviation.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return Err(PhraseError::invalid_format(phrase));
    }

    // Unknown abbreviations are rejected before the count is converted.
    let unit =
        shorthand_unit(abbreviation).ok_or_else(|| PhraseError::invalid_format(phrase))?;
    let magnitude = scale(count, unit, phrase)?;
    let duration = if negative { -magnitude } else { magnitude };

    trace!(phrase, nanos = ?duration.num_nanoseconds(), "parsed shorthand phrase");
    Ok(ParsedPhrase::interval(duration))
}
