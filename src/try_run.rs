//! Turning panics and foreign errors into exceptional failures.
//!
//! [`run`] executes a closure and converts a panic into
//! `Failure(ExceptionalError)` whose type is [`PanicError`]'s type name. Use it at
//! the seams where third-party code may panic; ordinary fallible code should
//! return an [`Outcome`] directly.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::try_run;
//!
//! let parsed = try_run::run(|| "7".parse::<i32>().map(|v| v * 6));
//! assert_eq!(parsed.into_value(), Some(Ok(42)));
//!
//! let exploded = try_run::run(|| -> i32 { panic!("index out of range") });
//! let error = exploded.into_error().unwrap();
//! assert!(error.is_exceptional());
//! assert_eq!(error.message(), "index out of range");
//! ```
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::outcome::{is_not_initialized, not_initialized, Outcome};
use crate::types::alloc_type::{Box, String};

/// A panic caught by [`run`] and friends, carrying the panic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Reads the panic message out of a payload returned by `catch_unwind`.
    ///
    /// A payload that signals an uninitialized [`Outcome`] or [`Ensure`](crate::Ensure)
    /// is not a fault of the guarded code: unwinding resumes with it unchanged.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast_ref::<String>() {
            Some(message) => message.clone(),
            None => match payload.downcast_ref::<&'static str>() {
                Some(message) => String::from(*message),
                None => String::from("panic with a non-string payload"),
            },
        };
        if is_not_initialized(&message) {
            panic::resume_unwind(payload);
        }
        Self { message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PanicError {}

/// Runs `f`, turning a panic into an exceptional failure.
pub fn run<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Outcome::success(value),
        Err(payload) => Outcome::failure(Error::from_fault(PanicError::from_payload(payload))),
    }
}

/// Runs an outcome-producing closure; a panic becomes an exceptional failure.
///
/// Returning or touching an uninitialized outcome inside `f` still panics.
pub fn run_outcome<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) if !outcome.is_initialized() => not_initialized("f"),
        Ok(outcome) => outcome,
        Err(payload) => Outcome::failure(Error::from_fault(PanicError::from_payload(payload))),
    }
}

/// Runs a fallible closure; both an `Err` and a panic become exceptional failures.
///
/// ```
/// use outcome_rail::try_run;
///
/// let outcome = try_run::run_result(|| "x".parse::<u8>());
/// let error = outcome.into_error().unwrap();
/// assert!(error.error_type().ends_with("ParseIntError"));
/// ```
pub fn run_result<T, E, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    run(f).bind(|result| match result {
        Ok(value) => Outcome::success(value),
        Err(fault) => Outcome::failure(Error::from_fault(fault)),
    })
}
