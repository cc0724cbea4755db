//! The dispatcher: shorthand first, natural language second.
//!
//! Fallthrough happens only on [`PhraseError::InvalidFormat`]. A phrase that
//! matched the shorthand shape but overflowed is reported as is; it is never
//! re-read as English.

use chrono::Duration;
use tracing::debug;

use crate::error::{PhraseError, Result};
use crate::natural::parse_natural;
use crate::phrase::ParsedPhrase;
use crate::shorthand::parse_shorthand;

/// Parse any supported phrase into a classified duration.
///
/// # Errors
///
/// Returns [`PhraseError::InvalidFormat`] if neither grammar accepts the
/// phrase, or [`PhraseError::Overflow`] from whichever grammar matched it.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use timephrase::{parse, PhraseType};
///
/// let (duration, kind) = parse("6h").unwrap().into();
/// assert_eq!((duration, kind), (Duration::hours(6), PhraseType::Interval));
///
/// let (duration, kind) = parse("6 hours from now").unwrap().into();
/// assert_eq!((duration, kind), (Duration::hours(6), PhraseType::Time));
/// ```
pub fn parse(phrase: &str) -> Result<ParsedPhrase> {
    match parse_shorthand(phrase) {
        Ok(parsed) => Ok(parsed),
        Err(PhraseError::InvalidFormat(_)) => {
            debug!(phrase, "not shorthand, trying natural language");
            parse_natural(phrase)
        }
        Err(err) => {
            debug!(phrase, error = %err, "shorthand phrase rejected");
            Err(err)
        }
    }
}

/// Like [`parse`], discarding the classification.
pub fn parse_duration(phrase: &str) -> Result<Duration> {
    parse(phrase).map(|parsed| parsed.duration)
}
