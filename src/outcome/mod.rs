//! The outcome of a computation: a value or a structured failure.
//!
//! [`Outcome<T>`] is the railway on which every combinator runs. It is built at a
//! boundary with [`Outcome::success`] or [`Outcome::failure`], threaded through
//! [`map`](Outcome::map), [`bind`](Outcome::bind) and friends, and finally
//! eliminated with [`match_with`](Outcome::match_with) or
//! [`into_result`](Outcome::into_result).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Outcome::failure(Error::with_type("config", "port is not a number")),
//!     }
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port.into_result(), Ok(8081));
//!
//! let broken = parse_port("http").map(|p| p + 1);
//! assert_eq!(broken.error().map(Error::error_type), Some("config"));
//! ```
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::Error;

mod combinators;
mod combine;
mod not_initialized;
mod tuple;

pub use combine::{combine, Combine};
pub use not_initialized::NotInitialized;
pub use tuple::TupleAppend;

pub(crate) use not_initialized::not_initialized;
#[cfg(feature = "std")]
pub(crate) use not_initialized::is_not_initialized;

#[derive(Clone)]
pub(crate) enum State<T> {
    Uninitialized,
    Success(T),
    Failure(Error),
}

/// Either a computed value or a non-empty [`Error`].
///
/// `Outcome` without a type parameter carries no success value (`Outcome<()>`).
/// The [`Default`] value is uninitialized: every query and combinator applied to it
/// panics with a [`NotInitialized`] message, and no operation ever produces it.
#[must_use]
#[derive(Clone)]
pub struct Outcome<T = ()> {
    pub(crate) state: State<T>,
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self { state: State::Success(value) }
    }

    /// Creates a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics when `error` is the empty aggregate: a failure always carries at
    /// least one error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed = Outcome::<i32>::failure("boom");
    /// assert!(failed.is_failure());
    /// ```
    #[track_caller]
    pub fn failure(error: impl Into<Error>) -> Self {
        let error = error.into();
        if error.is_empty() {
            panic!("an outcome cannot fail with an empty error");
        }
        Self { state: State::Failure(error) }
    }

    pub(crate) fn from_parts(parts: Result<T, Error>) -> Self {
        match parts {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// `false` only for the default, never constructed value. Never panics.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !matches!(self.state, State::Uninitialized)
    }

    #[inline]
    #[track_caller]
    pub fn is_success(&self) -> bool {
        self.peek("self").is_ok()
    }

    #[inline]
    #[track_caller]
    pub fn is_failure(&self) -> bool {
        self.peek("self").is_err()
    }

    /// The success value, if any.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> Option<&T> {
        self.peek("self").ok()
    }

    /// The failure error, if any.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> Option<&Error> {
        self.peek("self").err()
    }

    #[inline]
    #[track_caller]
    pub fn into_value(self) -> Option<T> {
        self.settle("self").ok()
    }

    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Option<Error> {
        self.settle("self").err()
    }

    /// Splits the outcome into a success flag, the value and the error.
    ///
    /// Exactly one of the two options is `Some`.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let (ok, value, error) = Outcome::success(3).unpack();
    /// assert!(ok);
    /// assert_eq!(value, Some(3));
    /// assert!(error.is_none());
    /// ```
    #[track_caller]
    pub fn unpack(self) -> (bool, Option<T>, Option<Error>) {
        match self.settle("self") {
            Ok(value) => (true, Some(value), None),
            Err(error) => (false, None, Some(error)),
        }
    }

    /// Converts into a standard `Result`, so that `?` can be used at the edges.
    #[inline]
    #[track_caller]
    pub fn into_result(self) -> Result<T, Error> {
        self.settle("self")
    }

    /// Borrows the success value.
    #[track_caller]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self.peek("self") {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome { state: State::Failure(error.clone()) },
        }
    }

    /// Converts the success value with `Into`.
    #[inline]
    #[track_caller]
    pub fn cast<R>(self) -> Outcome<R>
    where
        T: Into<R>,
    {
        self.map(Into::into)
    }

    /// Views the state, panicking with the name of `variable` when uninitialized.
    #[track_caller]
    pub(crate) fn peek(&self, variable: &'static str) -> Result<&T, &Error> {
        match &self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
            State::Uninitialized => not_initialized(variable),
        }
    }

    #[track_caller]
    pub(crate) fn settle(self, variable: &'static str) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
            State::Uninitialized => not_initialized(variable),
        }
    }
}

impl Outcome<()> {
    /// The successful outcome without a value.
    #[inline]
    pub fn unit() -> Self {
        Self::success(())
    }
}

impl<T> Outcome<Option<T>> {
    /// Moves an optional success value out: `None` becomes a failure made by `on_none`.
    #[track_caller]
    pub fn transpose_with(self, on_none: impl FnOnce() -> Error) -> Outcome<T> {
        self.bind(|value| match value {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(on_none()),
        })
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self { state: State::Uninitialized }
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        match (self.peek("self"), other.peek("other")) {
            (Ok(a), Ok(b)) => a == b,
            (Err(a), Err(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T: Hash> Hash for Outcome<T> {
    #[track_caller]
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.peek("self") {
            Ok(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            Err(error) => {
                state.write_u8(2);
                error.hash(state);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Uninitialized => f.write_str("Uninitialized"),
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Uninitialized => f.write_str("uninitialized"),
            State::Success(value) => value.fmt(f),
            State::Failure(error) => error.fmt(f),
        }
    }
}
