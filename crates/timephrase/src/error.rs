//! Error types for phrase parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    /// The phrase matches no grammar, names an unknown unit, or has a
    /// malformed count. The dispatcher falls through on this kind only.
    #[error("invalid format: '{0}'")]
    InvalidFormat(String),

    /// The phrase matched a grammar but its count, or the count times the
    /// unit, does not fit in signed 64-bit nanoseconds.
    #[error("duration overflow: '{0}'")]
    Overflow(String),
}

impl PhraseError {
    /// Whether this error means "not my grammar" rather than a fatal fault.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PhraseError::InvalidFormat(_))
    }

    pub(crate) fn invalid_format(phrase: &str) -> Self {
        PhraseError::InvalidFormat(phrase.to_string())
    }

    pub(crate) fn overflow(phrase: &str) -> Self {
        PhraseError::Overflow(phrase.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhraseError>;
