//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! async-specific items.
//!
//! # What's Included
//!
//! - **Traits**: [`FutureOutcomeExt`] - combinators on futures of outcomes
//! - **Functions**: [`merge_async`]
//! - **Types**: [`OutcomeFuture`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{merge_async, FutureOutcomeExt, OutcomeFuture};
