//! # timephrase
//!
//! Turn human-typed time phrases into signed durations.
//!
//! Two notations are accepted. Compact shorthand (`11h`, `-33us`, `1Y`) is
//! tried first; anything it does not recognize is read as an English relative
//! phrase (`"2 weeks ago"`, `"a minute from now"`, `"now"`, `"every 6 hours"`).
//! Every result carries a [`PhraseType`]: `Time` for offsets anchored to now,
//! `Interval` for free-standing periods.
//!
//! Months are always 31 days and years 365 days. Nothing here reads a clock.
//!
//! ## Modules
//!
//! - [`mod@parse`] — Dispatcher over both notations
//! - [`shorthand`] — `[+-]<digits><abbreviation>`
//! - [`natural`] — English relative phrases
//! - [`units`] — Unit name and abbreviation tables
//! - [`phrase`] — Result types
//! - [`error`] — Error types

pub mod error;
pub mod natural;
pub mod parse;
pub mod phrase;
pub mod shorthand;
pub mod units;

pub use error::{PhraseError, Result};
pub use natural::parse_natural;
pub use parse::{parse, parse_duration};
pub use phrase::{ParsedPhrase, PhraseType};
pub use shorthand::parse_shorthand;
pub use units::{shorthand_unit, unit_duration, UNITS};
