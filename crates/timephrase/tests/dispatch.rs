//! Public-API checks for the combined parser.

use chrono::Duration;
use timephrase::{parse, parse_duration, unit_duration, ParsedPhrase, PhraseError, PhraseType};

fn parsed(phrase: &str) -> (Duration, PhraseType) {
    parse(phrase)
        .unwrap_or_else(|e| panic!("{phrase:?} should parse: {e}"))
        .into()
}

#[test]
fn test_shorthand_table() {
    let cases = [
        ("11ns", Duration::nanoseconds(11)),
        ("11us", Duration::microseconds(11)),
        ("11ms", Duration::milliseconds(11)),
        ("11s", Duration::seconds(11)),
        ("11m", Duration::minutes(11)),
        ("11h", Duration::hours(11)),
        ("11D", Duration::days(11)),
        ("11W", Duration::weeks(11)),
        ("11M", Duration::days(11 * 31)),
        ("11Y", Duration::days(11 * 365)),
    ];
    for (phrase, expected) in cases {
        assert_eq!(parsed(phrase), (expected, PhraseType::Interval), "{phrase}");
    }
}

#[test]
fn test_signs() {
    assert_eq!(parsed("-33us"), (-Duration::microseconds(33), PhraseType::Interval));
    assert_eq!(parsed("+33us"), (Duration::microseconds(33), PhraseType::Interval));
}

#[test]
fn test_relative_phrases() {
    assert_eq!(parsed("1 second ago"), (-Duration::seconds(1), PhraseType::Time));
    assert_eq!(parsed("6 days ago"), (-Duration::hours(6 * 24), PhraseType::Time));
    assert_eq!(parsed("1 week ago"), (-Duration::hours(7 * 24), PhraseType::Time));
    assert_eq!(parsed("now"), (Duration::zero(), PhraseType::Time));
    assert_eq!(parsed("24 days from now"), (Duration::hours(24 * 24), PhraseType::Time));
    assert_eq!(parsed("12m"), (Duration::minutes(12), PhraseType::Interval));
    assert_eq!(parsed("every 6 hours"), (Duration::hours(6), PhraseType::Interval));
}

#[test]
fn test_equal_values_distinct_classification() {
    let future = parse("6 hours from now").unwrap();
    let every = parse("every 6 hours").unwrap();
    let shorthand = parse("6h").unwrap();

    assert_eq!(future.duration, every.duration);
    assert_eq!(every.duration, shorthand.duration);
    assert_eq!(future.phrase_type, PhraseType::Time);
    assert_eq!(every.phrase_type, PhraseType::Interval);
    assert_eq!(shorthand.phrase_type, PhraseType::Interval);
}

#[test]
fn test_rejections_are_invalid_format() {
    for phrase in ["ns", "", "abc", "5 fortnights ago", "11MS", "1 Second"] {
        let err = parse(phrase).unwrap_err();
        assert_eq!(err, PhraseError::InvalidFormat(phrase.to_string()), "{phrase:?}");
    }
}

#[test]
fn test_unit_name_is_not_an_abbreviation() {
    // "ns" is only a shorthand abbreviation; "nanoseconds" is only a word.
    assert!(parse("5 ns ago").unwrap_err().is_invalid_format());
    assert!(parse("5nanoseconds").unwrap_err().is_invalid_format());
    assert_eq!(unit_duration("nanoseconds"), Some(Duration::nanoseconds(1)));
}

#[test]
fn test_overflow_is_fatal() {
    for phrase in [
        "99999999999999999999s",
        "99999999999999999999 seconds ago",
        "9999999999 years ago",
        "every 9999999999 years",
    ] {
        let err = parse(phrase).unwrap_err();
        assert!(matches!(err, PhraseError::Overflow(_)), "{phrase}: {err}");
    }
}

#[test]
fn test_duration_only() {
    assert_eq!(parse_duration("2 weeks ago").unwrap(), -Duration::weeks(2));
    assert_eq!(parse_duration("a minute from now").unwrap(), Duration::minutes(1));
}

#[test]
fn test_serialized_shape() {
    let result: ParsedPhrase = parse("every 6 hours").unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"duration_ns":21600000000000,"phrase_type":"interval"}"#);
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || parse(&format!("{i} days ago")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.duration, -Duration::days(i as i64));
    }
}
