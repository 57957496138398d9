//! The error hierarchy: single failures and their flat aggregate.
//!
//! [`Error`] is a closed sum of three shapes:
//!
//! - [`ExpectedError`] - an anticipated business-rule violation;
//! - [`ExceptionalError`] - a caught fault wrapped for uniform handling;
//! - [`ManyErrors`] - an ordered, flat list of the two above.
//!
//! Errors are combined with [`Error::append`] (or `+`), an associative operation
//! whose identity is the empty aggregate. Aggregates are flattened at every
//! construction site, so no traversal ever has to recurse.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Error;
//!
//! let a = Error::new("name is required");
//! let b = Error::with_type("range", "age must be positive");
//! let c = Error::new("email is malformed");
//!
//! let all = (a.clone() + b.clone()) + c.clone();
//! assert_eq!(all.count(), 3);
//! assert_eq!(all.iter().cloned().collect::<Vec<_>>(), vec![a, b, c]);
//! ```
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use crate::types::alloc_type::{String, Vec};
use crate::types::ExtensionData;

mod exceptional;
mod expected;
mod fault;
mod many;
#[cfg(feature = "serde")]
mod serde_impl;

pub use exceptional::{ExceptionalError, SharedFault};
pub use expected::{ExpectedError, DEFAULT_ERROR_TYPE};
pub use fault::{AggregateError, RaisedError};
pub use many::{ManyErrors, MANY_ERRORS_TYPE};

pub(crate) use many::push_flattened;

static NO_EXTENSION_DATA: ExtensionData = ExtensionData::new();

/// A structured failure.
///
/// Equality, ordering and hashing only look at the `(type, message)` pairs of the
/// single errors involved, in order; extension data never participates, and an
/// expected and an exceptional error with the same type and message compare equal.
/// Aggregates order by [`count`](Error::count) first, then element-wise.
#[derive(Debug, Clone)]
pub enum Error {
    Expected(ExpectedError),
    Exceptional(ExceptionalError),
    Many(ManyErrors),
}

impl Error {
    /// Creates an expected error of type [`DEFAULT_ERROR_TYPE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::new("bad");
    /// assert_eq!(err.error_type(), "error");
    /// assert!(err.is_expected());
    /// ```
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Error::Expected(ExpectedError::from_message(message))
    }

    /// Creates an expected error with an explicit type tag.
    #[inline]
    pub fn with_type(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Expected(ExpectedError::new(error_type, message))
    }

    /// Creates an expected error carrying extension data.
    pub fn with_data<I, K, V>(
        error_type: impl Into<String>,
        message: impl Into<String>,
        data: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Error::Expected(ExpectedError::new(error_type, message).with_extension_data(data))
    }

    /// Wraps a caught fault as an exceptional error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let err = Error::from_fault("nan".parse::<i32>().unwrap_err());
    /// assert!(err.is_exceptional());
    /// assert!(err.error_type().ends_with("ParseIntError"));
    /// ```
    #[inline]
    pub fn from_fault<E>(fault: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Error::Exceptional(ExceptionalError::from_fault(fault))
    }

    /// Wraps a caught fault, reporting `message` instead of the fault's own text.
    #[inline]
    pub fn from_fault_with_message<E>(message: impl Into<String>, fault: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Error::Exceptional(ExceptionalError::from_fault_with_message(message, fault))
    }

    /// The empty aggregate, identity of [`append`](Error::append).
    #[inline]
    pub fn empty() -> Self {
        Error::Many(ManyErrors::empty())
    }

    /// Collects `errors` into one error.
    ///
    /// Nested aggregates are flattened and empty ones dropped, preserving
    /// encounter order. A single surviving error is returned as is; no survivors
    /// yield the empty aggregate.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Error;
    ///
    /// let only = Error::many([Error::empty(), Error::new("x"), Error::empty()]);
    /// assert!(matches!(only, Error::Expected(_)));
    ///
    /// let two = Error::many([Error::new("a"), Error::new("b")]);
    /// assert!(matches!(two, Error::Many(_)));
    /// ```
    pub fn many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let mut flat: Vec<Error> = Vec::new();
        for error in errors {
            push_flattened(&mut flat, error);
        }
        if flat.len() == 1 {
            if let Some(single) = flat.pop() {
                return single;
            }
        }
        Error::Many(ManyErrors::from_flat(flat))
    }

    /// Appends `next` after `self`.
    ///
    /// An empty side is the identity: `empty.append(e) == e` and
    /// `e.append(empty) == e`. Otherwise the result is a flat aggregate holding
    /// the children of `self` followed by the children of `next`.
    pub fn append(self, next: Error) -> Self {
        if next.is_empty() {
            return self;
        }
        if self.is_empty() {
            return next;
        }

        let mut flat: Vec<Error> = Vec::with_capacity(self.count() + next.count());
        push_flattened(&mut flat, self);
        push_flattened(&mut flat, next);
        Error::Many(ManyErrors::from_flat(flat))
    }

    /// Type tag; aggregates report [`MANY_ERRORS_TYPE`].
    pub fn error_type(&self) -> &str {
        match self {
            Error::Expected(e) => e.error_type(),
            Error::Exceptional(e) => e.error_type(),
            Error::Many(_) => MANY_ERRORS_TYPE,
        }
    }

    /// Message; aggregates join their children's messages with new lines.
    pub fn message(&self) -> &str {
        match self {
            Error::Expected(e) => e.message(),
            Error::Exceptional(e) => e.message(),
            Error::Many(many) => many.message(),
        }
    }

    /// Extension data of a single error; aggregates carry none.
    pub fn extension_data(&self) -> &ExtensionData {
        match self {
            Error::Expected(e) => e.extension_data(),
            Error::Exceptional(e) => e.extension_data(),
            Error::Many(_) => &NO_EXTENSION_DATA,
        }
    }

    /// Looks up a single extension value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extension_data().get(key).map(String::as_str)
    }

    /// Number of single errors represented.
    pub fn count(&self) -> usize {
        match self {
            Error::Expected(_) | Error::Exceptional(_) => 1,
            Error::Many(many) => many.len(),
        }
    }

    /// `true` only for the empty aggregate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `true` when every single error is an expected one.
    pub fn is_expected(&self) -> bool {
        match self {
            Error::Expected(_) => true,
            Error::Exceptional(_) => false,
            Error::Many(many) => many.is_expected(),
        }
    }

    /// `true` when at least one single error wraps a caught fault.
    pub fn is_exceptional(&self) -> bool {
        match self {
            Error::Expected(_) => false,
            Error::Exceptional(_) => true,
            Error::Many(many) => many.is_exceptional(),
        }
    }

    /// `true` when both errors hold the same sequence of type tags.
    pub fn is_similar_to(&self, other: &Error) -> bool {
        self.count() == other.count()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.error_type() == b.error_type())
    }

    /// Iterates over the single errors; a single error yields itself.
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        match self {
            Error::Many(many) => many.iter(),
            single => core::slice::from_ref(single).iter(),
        }
    }

    /// Consumes the error into its single errors.
    pub fn into_errors(self) -> Vec<Error> {
        let mut flat: Vec<Error> = Vec::new();
        push_flattened(&mut flat, self);
        flat
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::empty()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Exceptional(e) => e
                .cause()
                .map(|cause| cause as &(dyn core::error::Error + 'static)),
            _ => None,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count()
            && self.iter().zip(other.iter()).all(|(a, b)| {
                a.error_type() == b.error_type() && a.message() == b.message()
            })
    }
}

impl Eq for Error {}

impl PartialOrd for Error {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Error {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count().cmp(&other.count()).then_with(|| {
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| {
                    a.error_type()
                        .cmp(b.error_type())
                        .then_with(|| a.message().cmp(b.message()))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.count());
        for single in self.iter() {
            single.error_type().hash(state);
            single.message().hash(state);
        }
    }
}

impl Add for Error {
    type Output = Error;

    #[inline]
    fn add(self, rhs: Error) -> Error {
        self.append(rhs)
    }
}

impl AddAssign for Error {
    fn add_assign(&mut self, rhs: Error) {
        let current = core::mem::take(self);
        *self = current.append(rhs);
    }
}

impl Sum for Error {
    fn sum<I: Iterator<Item = Error>>(iter: I) -> Self {
        Error::many(iter)
    }
}

impl FromIterator<Error> for Error {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Error::many(iter)
    }
}

impl<'a> IntoIterator for &'a Error {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ExpectedError> for Error {
    #[inline]
    fn from(error: ExpectedError) -> Self {
        Error::Expected(error)
    }
}

impl From<ExceptionalError> for Error {
    #[inline]
    fn from(error: ExceptionalError) -> Self {
        Error::Exceptional(error)
    }
}

impl From<ManyErrors> for Error {
    #[inline]
    fn from(errors: ManyErrors) -> Self {
        Error::Many(errors)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Error::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Error::new(message)
    }
}
