//! English relative-time phrases.
//!
//! # Supported Phrases
//!
//! **Past**: `"<N> <unit> ago"`, `"a <unit> ago"`, `"an <unit> ago"`
//!
//! **Future**: `"<N> <unit> from now"`, `"a <unit> from now"`
//!
//! **Zero offset**: `"now"`
//!
//! **Recurring**: `"every <N> <unit>"`
//!
//! Units are the singular or plural names in [`UNITS`](crate::UNITS).
//! Matching ignores case and surrounding whitespace; words are separated by
//! one or more spaces.

use chrono::Duration;
use tracing::trace;

use crate::error::{PhraseError, Result};
use crate::phrase::ParsedPhrase;
use crate::units::{is_digits, scale, unit_duration};

/// Parse a natural-language phrase such as `"2 weeks ago"` or
/// `"every 6 hours"`.
///
/// Past and future offsets and `"now"` classify as
/// [`PhraseType::Time`](crate::PhraseType::Time); `"every ..."` classifies as
/// [`PhraseType::Interval`](crate::PhraseType::Interval).
///
/// # Errors
///
/// Returns [`PhraseError::InvalidFormat`] if no phrase form matches or the
/// unit is unknown, and [`PhraseError::Overflow`] if the count times the unit
/// does not fit in signed 64-bit nanoseconds.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use timephrase::{parse_natural, PhraseType};
///
/// let parsed = parse_natural("an hour ago").unwrap();
/// assert_eq!(parsed.duration, -Duration::hours(1));
/// assert_eq!(parsed.phrase_type, PhraseType::Time);
///
/// let parsed = parse_natural("Every 6 Hours").unwrap();
/// assert_eq!(parsed.duration, Duration::hours(6));
/// assert_eq!(parsed.phrase_type, PhraseType::Interval);
/// ```
pub fn parse_natural(phrase: &str) -> Result<ParsedPhrase> {
    let normalized = phrase.trim().to_lowercase();
    let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();

    let parsed = match words.as_slice() {
        [count, unit, "ago"] if is_digits(count) => {
            ParsedPhrase::time(-counted(count, unit, phrase)?)
        }
        [article, unit, "ago"] if is_article(article) => {
            ParsedPhrase::time(-single(unit, phrase)?)
        }
        [count, unit, "from", "now"] if is_digits(count) => {
            ParsedPhrase::time(counted(count, unit, phrase)?)
        }
        [article, unit, "from", "now"] if is_article(article) => {
            ParsedPhrase::time(single(unit, phrase)?)
        }
        ["now"] => ParsedPhrase::time(Duration::zero()),
        ["every", count, unit] if is_digits(count) => {
            ParsedPhrase::interval(counted(count, unit, phrase)?)
        }
        _ => return Err(PhraseError::invalid_format(phrase)),
    };

    trace!(
        phrase,
        nanos = parsed.num_nanoseconds(),
        phrase_type = %parsed.phrase_type,
        "parsed natural-language phrase"
    );
    Ok(parsed)
}

fn is_article(word: &str) -> bool {
    matches!(word, "a" | "an")
}

/// `count` units, as a non-negative duration.
fn counted(count: &str, unit: &str, phrase: &str) -> Result<Duration> {
    scale(count, single(unit, phrase)?, phrase)
}

/// One unit, as a non-negative duration.
fn single(unit: &str, phrase: &str) -> Result<Duration> {
    unit_duration(unit).ok_or_else(|| PhraseError::invalid_format(phrase))
}
