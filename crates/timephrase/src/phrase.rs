//! Parse results: a signed duration plus its classification.

use std::fmt;

use chrono::Duration;
use serde::{Serialize, Serializer};

/// Whether a phrase is anchored to now or describes a free-standing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseType {
    /// An offset from now, in the past or future ("2 weeks ago", "now").
    Time,
    /// A recurring or unanchored span ("every 6 hours", "11h").
    Interval,
}

impl fmt::Display for PhraseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseType::Time => f.write_str("time"),
            PhraseType::Interval => f.write_str("interval"),
        }
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedPhrase {
    /// Signed offset or period length. Negative for past offsets.
    #[serde(rename = "duration_ns", serialize_with = "serialize_nanos")]
    pub duration: Duration,
    pub phrase_type: PhraseType,
}

impl ParsedPhrase {
    pub(crate) fn time(duration: Duration) -> Self {
        Self {
            duration,
            phrase_type: PhraseType::Time,
        }
    }

    pub(crate) fn interval(duration: Duration) -> Self {
        Self {
            duration,
            phrase_type: PhraseType::Interval,
        }
    }

    pub fn is_time(&self) -> bool {
        self.phrase_type == PhraseType::Time
    }

    pub fn is_interval(&self) -> bool {
        self.phrase_type == PhraseType::Interval
    }

    /// The duration as a nanosecond count. Always fits: the parsers reject
    /// anything larger.
    pub fn num_nanoseconds(&self) -> i64 {
        self.duration.num_nanoseconds().unwrap_or(i64::MAX)
    }
}

impl From<ParsedPhrase> for (Duration, PhraseType) {
    fn from(parsed: ParsedPhrase) -> Self {
        (parsed.duration, parsed.phrase_type)
    }
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_nanoseconds().unwrap_or(i64::MAX))
}
