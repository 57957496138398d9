//! Conversions between [`Outcome`], `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges of
//! code that already speaks `Result`: lift a `Result` into an outcome, run the
//! pipeline, and hand a `Result` back so that `?` keeps working.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{Error, Outcome};
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed, Outcome::success(42));
//!
//! let outcome = result_to_outcome::<i32, _>(Err("boom"));
//! assert_eq!(outcome_to_result(outcome), Err(Error::new("boom")));
//! ```
use crate::error::Error;
use crate::outcome::Outcome;

/// Converts a `Result` whose error converts into [`Error`].
#[inline]
#[track_caller]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Error>,
{
    Outcome::from(result)
}

/// Converts an outcome back into a `Result`.
///
/// # Panics
///
/// Panics when `outcome` is uninitialized.
#[inline]
#[track_caller]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into_result()
}

/// Wraps the error of a fallible `Result` as an exceptional failure.
pub trait IntoOutcome<T> {
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(fault) => Outcome::failure(Error::from_fault(fault)),
        }
    }
}

impl<T> Outcome<T> {
    /// Lifts an `Option`, calling `on_none` for the missing value.
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let missing: Option<u8> = None;
    /// let outcome = Outcome::from_option(missing, || Error::with_type("not_found", "no value"));
    /// assert_eq!(outcome.error().map(Error::error_type), Some("not_found"));
    /// ```
    #[track_caller]
    pub fn from_option<F>(option: Option<T>, on_none: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        match option {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(on_none()),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    #[track_caller]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_parts(result.map_err(Into::into))
    }
}

/// Implicit lifting of an error into a failure.
impl<T> From<Error> for Outcome<T> {
    #[track_caller]
    fn from(error: Error) -> Self {
        Outcome::failure(error)
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[track_caller]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
