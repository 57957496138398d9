//! Async counterpart of [`try_run`](crate::try_run).

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::error::Error;
use crate::outcome::Outcome;
use crate::try_run::PanicError;

pin_project! {
    /// Future that turns a panic of the inner future into an exceptional failure.
    ///
    /// Created by [`run_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchUnwind<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut, T> Future for CatchUnwind<Fut>
where
    Fut: Future<Output = T>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let polled = panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx)));
        let outcome = match polled {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(value)) => Outcome::success(value),
            Err(payload) => Outcome::failure(Error::from_fault(PanicError::from_payload(payload))),
        };
        *this.done = true;
        Poll::Ready(outcome)
    }
}

impl<Fut, T> FusedFuture for CatchUnwind<Fut>
where
    Fut: Future<Output = T>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Awaits `future`, converting a panic while polling it into an exceptional failure.
///
/// # Example
///
/// ```rust
/// use outcome_rail::async_ext::run_async;
///
/// async fn example() {
///     let outcome = run_async(async { panic!("lost connection") }).await;
///     let error: outcome_rail::Error = outcome.into_error().unwrap();
///     assert_eq!(error.message(), "lost connection");
/// }
/// ```
pub fn run_async<Fut>(future: Fut) -> CatchUnwind<Fut>
where
    Fut: Future,
{
    CatchUnwind { future, done: false }
}
