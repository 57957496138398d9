//! Fluent validation of a single value.
//!
//! [`Ensure::that`] (or the [`ensure!`](crate::ensure) macro, which captures the
//! expression text as label) starts a chain of validators. The first violated rule
//! wins: once a validator fails, every later one passes the failure through. The
//! chain ends with [`result`](Ensure::result), which yields an [`Outcome`].
//!
//! Default errors have the type [`DEFAULT_ERROR_TYPE`] and a message naming the
//! label, for instance `Value {age} is not greater than requirement.`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, Error};
//!
//! let name = "   ";
//! let checked = ensure!(name).not_empty().not_whitespace().result();
//!
//! assert_eq!(
//!     checked.into_error(),
//!     Some(Error::with_type(
//!         "EnsureFailed",
//!         "Value {name} is empty or consists exclusively of white-space characters."
//!     ))
//! );
//! ```
use core::fmt;

use crate::error::Error;
use crate::outcome::{NotInitialized, Outcome, State};
use crate::types::alloc_type::{format, Cow};

mod traits;
mod validators;

pub use traits::{Emptiable, IntoEnsureError};
#[cfg(feature = "async")]
pub(crate) use validators::NOT_SATISFIED;

/// Type tag of the errors produced by failing validators.
pub const DEFAULT_ERROR_TYPE: &str = "EnsureFailed";

/// A value under validation, with the label used in diagnostic messages.
///
/// The [`Default`] value is uninitialized; validating or converting it panics.
#[must_use]
pub struct Ensure<T> {
    state: State<T>,
    label: Cow<'static, str>,
}

impl<T> Ensure<T> {
    /// Starts validating `value`.
    #[inline]
    pub fn that(value: T, label: impl Into<Cow<'static, str>>) -> Self {
        Self { state: State::Success(value), label: label.into() }
    }

    /// Continues validating the value of an existing outcome.
    ///
    /// A failed outcome stays failed and no validator runs.
    #[track_caller]
    pub fn from_outcome(outcome: Outcome<T>, label: impl Into<Cow<'static, str>>) -> Self {
        let state = match outcome.settle("outcome") {
            Ok(value) => State::Success(value),
            Err(error) => State::Failure(error),
        };
        Self { state, label: label.into() }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        !matches!(self.state, State::Uninitialized)
    }

    /// Ends the chain.
    ///
    /// # Panics
    ///
    /// Panics when the `Ensure` is uninitialized.
    #[track_caller]
    pub fn result(self) -> Outcome<T> {
        match self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(error) => Outcome::failure(error),
            State::Uninitialized => ensure_not_initialized("self"),
        }
    }

    /// Ends the chain with a standard `Result`.
    #[inline]
    #[track_caller]
    pub fn into_result(self) -> Result<T, Error> {
        self.result().into_result()
    }

    /// Runs one rule: `check` either passes a (possibly transformed) value on or
    /// rejects it, in which case `on_failure` provides the error.
    #[track_caller]
    pub(crate) fn verify<R, C, E>(self, check: C, on_failure: E) -> Ensure<R>
    where
        C: FnOnce(T) -> Option<R>,
        E: IntoEnsureError,
    {
        let Ensure { state, label } = self;
        let state = match state {
            State::Success(value) => match check(value) {
                Some(value) => State::Success(value),
                None => State::Failure(violation_error(on_failure, &label)),
            },
            State::Failure(error) => State::Failure(error),
            State::Uninitialized => ensure_not_initialized("self"),
        };
        Ensure { state, label }
    }

    #[cfg(feature = "async")]
    pub(crate) fn into_parts(self) -> (State<T>, Cow<'static, str>) {
        (self.state, self.label)
    }

    #[cfg(feature = "async")]
    pub(crate) fn from_parts(state: State<T>, label: Cow<'static, str>) -> Self {
        Self { state, label }
    }
}

impl<T> Default for Ensure<T> {
    fn default() -> Self {
        Self { state: State::Uninitialized, label: Cow::Borrowed("") }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ensure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Ensure");
        debug.field("label", &self.label);
        match &self.state {
            State::Uninitialized => debug.field("state", &"Uninitialized"),
            State::Success(value) => debug.field("value", value),
            State::Failure(error) => debug.field("error", error),
        };
        debug.finish()
    }
}

/// Default failure: `Value {label} <violation>`.
pub(crate) struct Violation(pub(crate) &'static str);

impl IntoEnsureError for Violation {
    fn into_ensure_error(self, label: &str) -> Error {
        Error::with_type(DEFAULT_ERROR_TYPE, format!("Value {{{label}}} {}", self.0))
    }
}

/// Builds the error of a violated rule.
///
/// # Panics
///
/// Panics when `on_failure` yields an empty error, since the failure it would
/// produce has nothing to report.
#[track_caller]
pub(crate) fn violation_error<E: IntoEnsureError>(on_failure: E, label: &str) -> Error {
    let error = on_failure.into_ensure_error(label);
    if error.is_empty() {
        panic!("validation of `{label}` cannot fail with an empty error");
    }
    error
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn ensure_not_initialized(variable: &'static str) -> ! {
    panic!("{}", NotInitialized::new("Ensure", variable))
}
