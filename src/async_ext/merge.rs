//! Async merging of outcome-producing futures.

use core::future::Future;

use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;

/// Awaits every future and merges the outcomes like [`Outcome::merge`].
///
/// # Note
///
/// Futures are awaited **sequentially** (not in parallel) to stay runtime
/// neutral. Every future is awaited even after a failure, so all errors are
/// reported. For parallel execution, drive the futures with a runtime-specific
/// combinator and pass the resulting outcomes to [`Outcome::merge`].
///
/// # Example
///
/// ```rust
/// use outcome_rail::prelude_async::*;
///
/// async fn check(value: i32) -> Outcome<i32> {
///     if value > 0 {
///         Outcome::success(value)
///     } else {
///         Outcome::failure(Error::new(format!("{value} is not positive")))
///     }
/// }
///
/// async fn example() {
///     let merged = merge_async([check(1), check(-2), check(-3)]).await;
///     assert_eq!(merged.error().map(|e| e.count()), Some(2));
/// }
/// ```
pub async fn merge_async<T, Fut, I>(futures: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    let iter = futures.into_iter();
    let (lower, upper) = iter.size_hint();
    let mut outcomes = Vec::with_capacity(upper.unwrap_or(lower));

    for future in iter {
        outcomes.push(future.await);
    }

    Outcome::merge(outcomes)
}
