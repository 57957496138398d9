//! Tokio-specific async extensions.
//!
//! Bridges Tokio tasks into the outcome railway: a task that panics or is
//! cancelled becomes an exceptional failure instead of a `JoinError` the caller
//! has to handle separately.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;

use tokio::task::JoinHandle;

use crate::error::Error;
use crate::outcome::Outcome;

/// Awaits a spawned task that produces an outcome.
///
/// A panicked or cancelled task becomes `Failure(ExceptionalError)` whose type is
/// the `JoinError` type name.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::join_outcome;
/// use outcome_rail::Outcome;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let handle = tokio::spawn(async { Outcome::success(5) });
///     assert_eq!(join_outcome(handle).await, Outcome::success(5));
/// }
/// ```
pub async fn join_outcome<T>(handle: JoinHandle<Outcome<T>>) -> Outcome<T> {
    match handle.await {
        Ok(outcome) => outcome,
        Err(join_error) => Outcome::failure(Error::from_fault(join_error)),
    }
}

/// Spawns `future` on the current Tokio runtime and awaits its outcome.
///
/// # Panics
///
/// Panics if called outside of a Tokio runtime.
pub async fn spawn_outcome<T, Fut>(future: Fut) -> Outcome<T>
where
    Fut: Future<Output = Outcome<T>> + Send + 'static,
    T: Send + 'static,
{
    join_outcome(tokio::spawn(future)).await
}
