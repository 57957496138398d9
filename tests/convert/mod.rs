use std::num::ParseIntError;

use outcome_rail::convert::{outcome_to_result, result_to_outcome};
use outcome_rail::{Error, IntoOutcome, Outcome};

#[test]
fn result_with_error_convertible_lifts_directly() {
    let ok: Outcome<i32> = Ok::<_, Error>(1).into();
    assert_eq!(ok, Outcome::success(1));

    let failed = result_to_outcome::<i32, _>(Err("not found"));
    assert_eq!(failed.into_error(), Some(Error::new("not found")));
}

#[test]
fn into_outcome_wraps_faults_as_exceptional() {
    let parsed = "12".parse::<i32>().into_outcome();
    assert_eq!(parsed, Outcome::success(12));

    let broken = "twelve".parse::<i32>().into_outcome();
    let error = broken.into_error().unwrap();
    assert!(error.is_exceptional());
    assert!(error.error_type().ends_with("ParseIntError"));
}

#[test]
fn outcome_converts_back_to_result() {
    assert_eq!(outcome_to_result(Outcome::success('x')), Ok('x'));

    let result: Result<char, Error> = Outcome::<char>::failure("bad").into();
    assert_eq!(result, Err(Error::new("bad")));
}

#[test]
fn error_lifts_into_failure() {
    let failed: Outcome<u8> = Error::with_type("quota", "exceeded").into();
    assert_eq!(failed.error().map(Error::error_type), Some("quota"));
}

#[test]
fn option_lifts_with_fallback_error() {
    let found = Outcome::from_option(Some(3), || Error::new("missing"));
    assert_eq!(found, Outcome::success(3));

    let missing = Outcome::<i32>::from_option(None, || Error::with_type("not_found", "no row"));
    assert_eq!(missing.into_error(), Some(Error::with_type("not_found", "no row")));
}

#[test]
fn question_mark_at_the_edges() {
    fn parse_sum(a: &str, b: &str) -> Result<i32, Error> {
        let a = a.parse::<i32>().into_outcome().into_result()?;
        let b = b.parse::<i32>().into_outcome().into_result()?;
        Ok(a + b)
    }

    assert_eq!(parse_sum("1", "2"), Ok(3));
    let error = parse_sum("1", "x").unwrap_err();
    assert!(error.to_std_error().downcast_ref::<ParseIntError>().is_some());
}
