use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

use outcome_rail::{Error, ExceptionalError, ExpectedError};

mod aggregate;

fn hash_of(error: &Error) -> u64 {
    let mut hasher = DefaultHasher::new();
    error.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_uses_default_type() {
    let err = Error::new("bad input");
    assert_eq!(err.error_type(), "error");
    assert_eq!(err.message(), "bad input");
    assert_eq!(err.count(), 1);
    assert!(err.is_expected());
    assert!(!err.is_exceptional());
    assert!(!err.is_empty());
}

#[test]
fn string_conversions_build_expected_errors() {
    let from_str: Error = "oops".into();
    let from_string: Error = String::from("oops").into();

    assert_eq!(from_str, from_string);
    assert!(matches!(from_str, Error::Expected(_)));
}

#[test]
fn equality_ignores_extension_data() {
    let plain = Error::with_type("validation", "age is negative");
    let tagged = Error::with_data("validation", "age is negative", [("field", "age")]);

    assert_eq!(plain, tagged);
    assert_eq!(hash_of(&plain), hash_of(&tagged));
    assert_eq!(tagged.get("field"), Some("age"));
    assert_eq!(plain.get("field"), None);
}

#[test]
fn equality_crosses_variants() {
    let expected = Error::from(ExpectedError::new("io", "disk full"));
    let exceptional = Error::from(ExceptionalError::new("io", "disk full"));

    assert_eq!(expected, exceptional);
    assert_eq!(exceptional, expected);
    assert_eq!(hash_of(&expected), hash_of(&exceptional));
}

#[test]
fn equality_requires_type_and_message() {
    assert_ne!(Error::with_type("a", "m"), Error::with_type("b", "m"));
    assert_ne!(Error::with_type("a", "m"), Error::with_type("a", "n"));
}

#[test]
fn similarity_only_compares_types() {
    let a = Error::with_type("range", "too small");
    let b = Error::with_type("range", "too large");
    let c = Error::with_type("format", "too small");

    assert!(a.is_similar_to(&b));
    assert!(!a.is_similar_to(&c));
    assert!((a.clone() + c.clone()).is_similar_to(&(b.clone() + c.clone())));
    assert!(!(a.clone() + c.clone()).is_similar_to(&a));
}

#[test]
fn ordering_compares_count_first() {
    let single = Error::with_type("z", "z");
    let pair = Error::new("a") + Error::new("b");

    assert!(single < pair);
    assert!(Error::with_type("a", "x") < Error::with_type("b", "a"));
    assert!(Error::with_type("a", "x") < Error::with_type("a", "y"));

    let mut sorted = vec![pair.clone(), Error::new("m"), Error::empty()];
    sorted.sort();
    assert_eq!(sorted, vec![Error::empty(), Error::new("m"), pair]);
}

#[test]
fn exceptional_error_keeps_extension_data() {
    let err = ExceptionalError::new("timeout", "no answer")
        .with_extension_data([("host", "db-1"), ("", "skipped"), ("port", "")]);

    assert_eq!(err.get("host"), Some("db-1"));
    assert_eq!(err.extension_data().len(), 1);
    assert!(err.cause().is_none());
}

#[test]
fn display_prints_message() {
    assert_eq!(Error::new("plain").to_string(), "plain");
    assert_eq!((Error::new("a") + Error::new("b")).to_string(), "a\nb");
}
