//! Async counterparts of the outcome combinators.
//!
//! Each method awaits the supplied future only on the branch its synchronous
//! counterpart would run, then resumes the same transition.

use core::future::Future;

use crate::error::Error;
use crate::outcome::{Outcome, TupleAppend};

impl<T> Outcome<T> {
    /// Async [`map`](Outcome::map).
    ///
    /// ```rust
    /// use outcome_rail::Outcome;
    ///
    /// async fn example() {
    ///     let doubled = Outcome::success(21).map_async(|x| async move { x * 2 }).await;
    ///     assert_eq!(doubled, Outcome::success(42));
    /// }
    /// ```
    pub async fn map_async<R, F, Fut>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self.settle("self") {
            Ok(value) => Outcome::success(f(value).await),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Async [`bind`](Outcome::bind).
    pub async fn bind_async<R, F, Fut>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<R>>,
    {
        match self.settle("self") {
            Ok(value) => f(value).await,
            Err(error) => Outcome::failure(error),
        }
    }

    /// Async [`match_with`](Outcome::match_with); only the selected branch is awaited.
    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Error) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.settle("self") {
            Ok(value) => on_success(value).await,
            Err(error) => on_failure(error).await,
        }
    }

    /// Async [`tap`](Outcome::tap).
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = self.peek("self") {
            f(value).await;
        }
        self
    }

    /// Async [`tap_failure`](Outcome::tap_failure).
    pub async fn tap_failure_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&Error) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(error) = self.peek("self") {
            f(error).await;
        }
        self
    }

    /// Async [`try_recover`](Outcome::try_recover).
    pub async fn try_recover_async<F, Fut>(self, recover: F) -> Self
    where
        F: FnOnce(Error) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self.settle("self") {
            Ok(value) => Outcome::success(value),
            Err(error) => recover(error).await,
        }
    }

    /// Async [`append_with`](Outcome::append_with): `next` is only started on success.
    pub async fn append_async<R, F, Fut>(self, next: F) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<R>>,
    {
        let current = match self.settle("self") {
            Ok(current) => current,
            Err(error) => return Outcome::failure(error),
        };
        match next().await.settle("next") {
            Ok(extra) => Outcome::success(current.append(extra)),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Async [`extend`](Outcome::extend).
    pub async fn extend_async<R, F, Fut>(self, f: F) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Outcome<R>>,
    {
        let current = match self.settle("self") {
            Ok(current) => current,
            Err(error) => return Outcome::failure(error),
        };
        match f(&current).await.settle("extension") {
            Ok(extra) => Outcome::success(current.append(extra)),
            Err(error) => Outcome::failure(error),
        }
    }
}
