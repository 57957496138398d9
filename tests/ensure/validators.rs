use std::cell::Cell;
use std::collections::{BTreeMap, VecDeque};

use outcome_rail::{ensure, Ensure, Error};

fn message_of<T>(ensure: Ensure<T>) -> Option<String> {
    ensure.result().into_error().map(|e| e.message().to_owned())
}

#[test]
fn not_null_unwraps_present_value() {
    let port: Option<u16> = Some(80);
    assert_eq!(Ensure::that(port, "port").not_null().into_result(), Ok(80));

    let missing: Option<u16> = None;
    assert_eq!(
        message_of(Ensure::that(missing, "port").not_null()),
        Some(String::from("Value {port} is null."))
    );
}

#[test]
fn not_null_failure_stops_the_chain() {
    let calls = Cell::new(0);
    let checked = Ensure::that(None::<String>, "x")
        .not_null()
        .not_empty()
        .satisfies(|_| {
            calls.set(calls.get() + 1);
            true
        });

    assert_eq!(message_of(checked), Some(String::from("Value {x} is null.")));
    assert_eq!(calls.get(), 0);
}

#[test]
fn is_none_rejects_present_value() {
    assert!(Ensure::that(None::<i32>, "override").is_none().result().is_success());
    assert_eq!(
        message_of(Ensure::that(Some(1), "override").is_none()),
        Some(String::from("Value {override} is not null."))
    );
}

#[test]
fn not_empty_covers_strings_and_collections() {
    assert_eq!(
        message_of(Ensure::that(String::new(), "name").not_empty()),
        Some(String::from("Value {name} is empty."))
    );
    assert!(message_of(Ensure::that(vec![1], "ids").not_empty()).is_none());
    assert!(message_of(Ensure::that(Vec::<i32>::new(), "ids").not_empty()).is_some());
    assert!(message_of(Ensure::that(VecDeque::<i32>::new(), "queue").not_empty()).is_some());
    assert!(message_of(Ensure::that(BTreeMap::<i32, i32>::new(), "map").not_empty()).is_some());
    assert!(message_of(Ensure::that([0_u8; 0], "bytes").not_empty()).is_some());
    assert!(message_of(Ensure::that(&[1, 2][..], "slice").not_empty()).is_none());
}

#[cfg(feature = "std")]
#[test]
fn not_empty_covers_hash_collections() {
    use std::collections::{HashMap, HashSet};

    assert!(message_of(Ensure::that(HashMap::<i32, i32>::new(), "map").not_empty()).is_some());
    assert!(message_of(Ensure::that(HashSet::from([1]), "set").not_empty()).is_none());
}

#[test]
fn not_whitespace_trims() {
    assert_eq!(
        message_of(Ensure::that(" \t\n", "title").not_whitespace()),
        Some(String::from(
            "Value {title} is empty or consists exclusively of white-space characters."
        ))
    );
    assert!(message_of(Ensure::that("", "title").not_whitespace()).is_some());
    assert!(message_of(Ensure::that(" a ", "title").not_whitespace()).is_none());
}

#[test]
fn not_whitespace_labels_literal_with_its_source_text() {
    assert_eq!(
        message_of(ensure!("   ").not_whitespace()),
        Some(String::from(
            "Value {\"   \"} is empty or consists exclusively of white-space characters."
        ))
    );
}

#[test]
fn boolean_validators() {
    assert!(message_of(Ensure::that(true, "flag").is_true()).is_none());
    assert_eq!(
        message_of(Ensure::that(false, "flag").is_true()),
        Some(String::from("Value {flag} is not true."))
    );
    assert_eq!(
        message_of(Ensure::that(true, "flag").is_false()),
        Some(String::from("Value {flag} is not false."))
    );
}

#[test]
fn equality_validators() {
    assert!(message_of(Ensure::that("a", "code").equal_to("a")).is_none());
    assert_eq!(
        message_of(Ensure::that(1, "code").equal_to(2)),
        Some(String::from("Value {code} is not equal to requirement."))
    );
    assert_eq!(
        message_of(Ensure::that(1, "code").not_equal_to(1)),
        Some(String::from("Value {code} is equal to requirement."))
    );
}

#[test]
fn equality_accepts_foreign_requirement_type() {
    let owned = String::from("admin");
    assert!(message_of(Ensure::that(owned, "role").equal_to("admin")).is_none());
}

#[test]
fn ordering_validators() {
    assert_eq!(
        message_of(Ensure::that(5, "n").less_than(5)),
        Some(String::from("Value {n} is not less than requirement."))
    );
    assert_eq!(
        message_of(Ensure::that(5, "n").greater_than(5)),
        Some(String::from("Value {n} is not greater than requirement."))
    );
    assert_eq!(
        message_of(Ensure::that(6, "n").less_than_or_equal_to(5)),
        Some(String::from("Value {n} is greater than requirement."))
    );
    assert_eq!(
        message_of(Ensure::that(4, "n").greater_than_or_equal_to(5)),
        Some(String::from("Value {n} is less than requirement."))
    );
    assert!(message_of(Ensure::that(5, "n").less_than_or_equal_to(5)).is_none());
    assert!(message_of(Ensure::that(5, "n").greater_than_or_equal_to(5)).is_none());
}

#[test]
fn ordering_with_floats() {
    assert!(message_of(Ensure::that(f64::NAN, "ratio").less_than(1.0)).is_some());
    assert!(message_of(Ensure::that(0.5, "ratio").less_than(1.0)).is_none());
}

#[test]
fn satisfies_uses_default_message() {
    assert_eq!(
        message_of(Ensure::that(7, "n").satisfies(|n| n % 2 == 0)),
        Some(String::from("Value {n} does not satisfy the requirement."))
    );
}

#[test]
fn every_validator_has_custom_error_variant() {
    let custom = || Error::with_type("custom", "rejected");

    let results = [
        Ensure::that(None::<i32>, "v").not_null_or(custom()).result().map(|_| ()),
        Ensure::that(Some(1), "v").is_none_or(custom()).result().map(|_| ()),
        Ensure::that("", "v").not_empty_or(custom()).result().map(|_| ()),
        Ensure::that(" ", "v").not_whitespace_or(custom()).result().map(|_| ()),
        Ensure::that(false, "v").is_true_or(custom()).result().map(|_| ()),
        Ensure::that(true, "v").is_false_or(custom()).result().map(|_| ()),
        Ensure::that(1, "v").satisfies_or(|_| false, custom()).result().map(|_| ()),
        Ensure::that(1, "v").equal_to_or(2, custom()).result().map(|_| ()),
        Ensure::that(1, "v").not_equal_to_or(1, custom()).result().map(|_| ()),
        Ensure::that(1, "v").less_than_or(0, custom()).result().map(|_| ()),
        Ensure::that(1, "v").greater_than_or(2, custom()).result().map(|_| ()),
        Ensure::that(1, "v").less_than_or_equal_to_or(0, custom()).result().map(|_| ()),
        Ensure::that(1, "v").greater_than_or_equal_to_or(2, custom()).result().map(|_| ()),
    ];

    for outcome in results {
        assert_eq!(outcome.into_error(), Some(custom()));
    }
}
