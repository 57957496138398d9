//! Future wrapper that transforms an outcome once it resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A future that applies a synchronous transition to the outcome of an inner future.
    ///
    /// Created by the [`FutureOutcomeExt`](super::FutureOutcomeExt) methods. The
    /// transition runs exactly once, when the inner future resolves.
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut, F> {
        #[pin]
        future: Fut,
        transition: Option<F>,
    }
}

impl<Fut, F> OutcomeFuture<Fut, F> {
    #[inline]
    pub fn new(future: Fut, transition: F) -> Self {
        Self { future, transition: Some(transition) }
    }
}

impl<Fut, F, T, R> Future for OutcomeFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> Outcome<R>,
{
    type Output = Outcome<R>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| match this.transition.take() {
            Some(transition) => transition(outcome),
            None => panic!("OutcomeFuture polled after completion"),
        })
    }
}

impl<Fut, F, T, R> FusedFuture for OutcomeFuture<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> Outcome<R>,
{
    fn is_terminated(&self) -> bool {
        self.transition.is_none() || self.future.is_terminated()
    }
}
