//! Tracing integration for outcome-rail.
//!
//! The core never logs. These helpers emit `tracing` events from inside a
//! pipeline without changing the outcome flowing through it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::{debug, error, warn};

use crate::error::Error;
use crate::outcome::Outcome;

/// Extension trait that records failures as `tracing` events.
///
/// Expected failures are logged at `WARN`, failures that contain an exceptional
/// error at `ERROR`. Each event carries the `operation` name and the
/// `error.kind`, `error.message` and `error.count` fields.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::OutcomeTracingExt;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<u32>::failure("quota exceeded").trace_failure("reserve_seat");
/// assert!(outcome.is_failure());
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Logs the error of a failed outcome and returns the outcome unchanged.
    fn trace_failure(self, operation: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), and also logs success at `DEBUG`.
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T> OutcomeTracingExt for Outcome<T> {
    #[track_caller]
    fn trace_failure(self, operation: &str) -> Self {
        self.tap_failure(|error| record_failure(operation, error))
    }

    #[track_caller]
    fn trace_outcome(self, operation: &str) -> Self {
        self.tap(|_| debug!(operation, "operation succeeded"))
            .trace_failure(operation)
    }
}

/// Emits a single event describing `error`.
pub fn record_failure(operation: &str, error: &Error) {
    if error.is_exceptional() {
        error!(
            operation,
            error.kind = error.error_type(),
            error.message = error.message(),
            error.count = error.count(),
            "operation failed with an exceptional error"
        );
    } else {
        warn!(
            operation,
            error.kind = error.error_type(),
            error.message = error.message(),
            error.count = error.count(),
            "operation failed"
        );
    }
}
