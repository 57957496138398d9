//! Railway-oriented outcomes with flattening error aggregation.
//!
//! Every fallible step produces an [`Outcome<T>`]: either a value or an
//! [`Error`]. Short-circuiting combinators ([`map`](Outcome::map),
//! [`bind`](Outcome::bind), [`tap`](Outcome::tap),
//! [`try_recover`](Outcome::try_recover)) stop at the first failure, while the
//! accumulating ones ([`Combine`], [`append`](Outcome::append),
//! [`merge`](Outcome::merge)) evaluate every input and report all failures as
//! one flat [`ManyErrors`]. [`Ensure`] and the [`ensure!`] macro put a fluent
//! validation front end on top.
//!
//! # Examples
//!
//! ## Short-circuiting
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<i32> {
//!     raw.parse::<i32>()
//!         .map_err(|e| Error::with_type("parse", e.to_string()))
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|v| v * 2);
//! assert_eq!(doubled.into_result(), Ok(42));
//!
//! let mut calls = 0;
//! let skipped = parse("x").map(|v| {
//!     calls += 1;
//!     v * 2
//! });
//! assert!(skipped.is_failure());
//! assert_eq!(calls, 0);
//! ```
//!
//! ## Accumulating
//!
//! ```
//! use outcome_rail::{Combine, Outcome};
//!
//! let combined = (
//!     Outcome::<i32>::failure("first"),
//!     Outcome::success("ok"),
//!     Outcome::<bool>::failure("second"),
//! )
//!     .combine();
//!
//! let error = combined.into_error().unwrap();
//! assert_eq!(error.count(), 2);
//! assert_eq!(error.message(), "first\nsecond");
//! ```
//!
//! ## Validation
//!
//! ```
//! use outcome_rail::ensure;
//!
//! let nickname = "   ";
//! let checked = ensure!(nickname).not_whitespace().result();
//! assert_eq!(
//!     checked.error().unwrap().message(),
//!     "Value {nickname} is empty or consists exclusively of white-space characters."
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Option` and `Outcome`
pub mod convert;
/// Fluent validation chains
pub mod ensure;
/// The error hierarchy: expected, exceptional and aggregated errors
pub mod error;
/// Validation macros
pub mod macros;
/// The `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Shared storage types
pub mod types;

/// Panic capture at integration seams (requires `std` feature)
#[cfg(feature = "std")]
pub mod try_run;

/// Async extensions for outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Structured logging of failures (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::IntoOutcome;
pub use ensure::{Emptiable, Ensure, IntoEnsureError};
pub use error::{
    AggregateError, Error, ExceptionalError, ExpectedError, ManyErrors, RaisedError, SharedFault,
};
pub use outcome::{combine, Combine, NotInitialized, Outcome, TupleAppend};
pub use types::{ErrorAccumulator, ErrorVec};
