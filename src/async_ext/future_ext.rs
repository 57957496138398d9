//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Provides the synchronous combinators as future adapters, so that an async
//! producer can be threaded through a pipeline before being awaited.

use core::future::Future;

use crate::error::Error;
use crate::outcome::Outcome;

use super::outcome_future::OutcomeFuture;

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Every method returns an [`OutcomeFuture`]; nothing runs until it is awaited,
/// and the supplied closure only runs on the branch the synchronous combinator
/// would run.
///
/// # Examples
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<u32> {
///     if id == 0 {
///         Outcome::failure(Error::with_type("not_found", "no user 0"))
///     } else {
///         Outcome::success(id)
///     }
/// }
///
/// async fn example() {
///     let name = load(7).map_outcome(|id| format!("user-{id}")).await;
///     assert_eq!(name, Outcome::success("user-7".to_string()));
///
///     let fallback = load(0)
///         .recover_outcome(|_| Outcome::success(1))
///         .await;
///     assert_eq!(fallback, Outcome::success(1));
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Applies an arbitrary transition to the resolved outcome.
    fn then_outcome<R, F>(self, f: F) -> OutcomeFuture<Self, F>
    where
        F: FnOnce(Outcome<T>) -> Outcome<R>;

    /// [`Outcome::map`] once the future resolves.
    fn map_outcome<R, F>(self, f: F) -> OutcomeFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<R>>
    where
        F: FnOnce(T) -> R,
    {
        self.then_outcome(move |outcome| outcome.map(f))
    }

    /// [`Outcome::bind`] once the future resolves.
    fn bind_outcome<R, F>(self, f: F) -> OutcomeFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<R>>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        self.then_outcome(move |outcome| outcome.bind(f))
    }

    /// [`Outcome::tap`] once the future resolves.
    fn tap_outcome<F>(self, f: F) -> OutcomeFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(&T),
    {
        self.then_outcome(move |outcome| outcome.tap(f))
    }

    /// [`Outcome::try_recover`] once the future resolves.
    fn recover_outcome<F>(self, f: F) -> OutcomeFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<T>>
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        self.then_outcome(move |outcome| outcome.try_recover(f))
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut
where
    Fut: Future<Output = Outcome<T>>,
{
    #[inline]
    fn then_outcome<R, F>(self, f: F) -> OutcomeFuture<Self, F>
    where
        F: FnOnce(Outcome<T>) -> Outcome<R>,
    {
        OutcomeFuture::new(self, f)
    }
}
