//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`ensure!`]
//! - **Types**: [`Outcome`], [`Error`], [`Ensure`]
//! - **Traits**: [`Combine`], [`IntoOutcome`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn register(name: &str, age: u32) -> Outcome<(String, u32)> {
//!     (
//!         ensure!(name).not_whitespace().result().map(str::to_owned),
//!         ensure!(age).greater_than_or_equal_to(18).result(),
//!     )
//!         .combine()
//! }
//!
//! assert!(register("ada", 36).is_success());
//! assert_eq!(register(" ", 12).error().map(Error::count), Some(2));
//! ```

// Macros
pub use crate::ensure;

// Core types
pub use crate::{Ensure, Error, Outcome};

// Traits
pub use crate::convert::IntoOutcome;
pub use crate::outcome::Combine;
