//! Storage types shared by the error hierarchy and the combinators.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::accumulator::ErrorAccumulator;
//! use outcome_rail::Error;
//!
//! let mut acc = ErrorAccumulator::new();
//! acc.push(Error::new("first"));
//! acc.push(Error::new("second"));
//!
//! let error = acc.into_error().unwrap();
//! assert_eq!(error.count(), 2);
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;

pub use accumulator::ErrorAccumulator;

/// SmallVec-backed scratch list used while errors are being accumulated.
///
/// Uses inline storage for up to 2 elements, which covers the common case of
/// combining two failures without touching the heap for the list itself. It is
/// never stored inside [`Error`](crate::Error): aggregates own a `Vec`.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Out-of-band key/value data attached to a single error.
///
/// Ordered by key so that iteration and serialization are deterministic.
pub type ExtensionData = alloc_type::BTreeMap<alloc_type::String, alloc_type::String>;
