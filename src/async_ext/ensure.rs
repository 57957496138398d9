//! Async entry points of the validation chain.

use core::future::Future;

use crate::ensure::{
    ensure_not_initialized, violation_error, Ensure, IntoEnsureError, Violation, NOT_SATISFIED,
};
use crate::outcome::State;
use crate::types::alloc_type::Cow;

impl<T> Ensure<T> {
    /// Awaits `value` and starts validating it.
    ///
    /// ```rust
    /// use outcome_rail::Ensure;
    ///
    /// async fn example() {
    ///     let checked = Ensure::that_async(async { 5 }, "quota").await.greater_than(0).result();
    ///     assert!(checked.is_success());
    /// }
    /// ```
    pub async fn that_async<Fut>(value: Fut, label: impl Into<Cow<'static, str>>) -> Self
    where
        Fut: Future<Output = T>,
    {
        let label = label.into();
        Ensure::that(value.await, label)
    }

    /// Requires an asynchronous predicate to hold for the value.
    ///
    /// The predicate is not started when the chain has already failed.
    pub async fn satisfies_async<P, Fut>(self, requirement: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.satisfies_async_or(requirement, Violation(NOT_SATISFIED))
            .await
    }

    pub async fn satisfies_async_or<P, Fut, E>(self, requirement: P, on_failure: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        E: IntoEnsureError,
    {
        let (state, label) = self.into_parts();
        let state = match state {
            State::Success(value) => {
                if requirement(&value).await {
                    State::Success(value)
                } else {
                    State::Failure(violation_error(on_failure, &label))
                }
            }
            State::Failure(error) => State::Failure(error),
            State::Uninitialized => ensure_not_initialized("self"),
        };
        Ensure::from_parts(state, label)
    }
}
