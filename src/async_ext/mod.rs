//! Async extensions for outcome-rail.
//!
//! Suspension only happens at the boundary: each async variant awaits the
//! supplied future and then performs the same transition as its synchronous
//! counterpart. Nothing here spawns tasks or depends on a runtime, except the
//! optional [`tokio_ext`] bridge.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::prelude_async::*;
//!
//! async fn fetch_quota(user: u32) -> Outcome<u32> {
//!     Outcome::success(user * 10)
//! }
//!
//! async fn example() -> Outcome<(u32, u32)> {
//!     Outcome::success((1_u32,))
//!         .extend_async(|(user,)| fetch_quota(*user))
//!         .await
//! }
//! ```

mod ensure;
mod future_ext;
mod merge;
mod outcome_async;
mod outcome_future;

#[cfg(feature = "std")]
mod attempt;

#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::FutureOutcomeExt;
pub use merge::merge_async;
pub use outcome_future::OutcomeFuture;

#[cfg(feature = "std")]
pub use attempt::{run_async, CatchUnwind};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::{join_outcome, spawn_outcome};
