//! Allocation-backed types shared by every module.
//!
//! The crate always links `alloc`; these aliases keep the import lists short and
//! identical whether or not the `std` feature is enabled.
pub use alloc::borrow::{Cow, ToOwned};
pub use alloc::boxed::Box;
pub use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
pub use alloc::format;
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::{IntoIter, Vec};
