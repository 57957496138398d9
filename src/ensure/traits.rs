use crate::error::Error;
use crate::types::alloc_type::{BTreeMap, BTreeSet, Box, Cow, String, ToOwned, Vec, VecDeque};

/// Values that can be checked for emptiness by [`Ensure::not_empty`](super::Ensure::not_empty).
pub trait Emptiable {
    fn is_empty_value(&self) -> bool;
}

impl Emptiable for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiable for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiable for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiable for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for VecDeque<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiable for BTreeMap<K, V> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiable for BTreeSet<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Emptiable for std::collections::HashMap<K, V, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<T, S> Emptiable for std::collections::HashSet<T, S> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<B> Emptiable for Cow<'_, B>
where
    B: Emptiable + ToOwned + ?Sized,
{
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_empty_value()
    }
}

impl<T: Emptiable + ?Sized> Emptiable for Box<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: Emptiable + ?Sized> Emptiable for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Supplies the error recorded when a validator rejects its value.
///
/// Implemented for [`Error`], used as is, and for closures `FnOnce(&str) -> Error`
/// that receive the label of the validated value.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Ensure, Error};
///
/// let fixed = Ensure::that(3, "retries").greater_than_or(5, Error::new("too few retries"));
/// assert_eq!(fixed.result().error().unwrap().message(), "too few retries");
///
/// let built = Ensure::that(3, "retries")
///     .greater_than_or(5, |label: &str| Error::with_type("range", format!("{label} must exceed 5")));
/// assert_eq!(built.result().error().unwrap().message(), "retries must exceed 5");
/// ```
pub trait IntoEnsureError {
    fn into_ensure_error(self, label: &str) -> Error;
}

impl IntoEnsureError for Error {
    #[inline]
    fn into_ensure_error(self, _label: &str) -> Error {
        self
    }
}

impl<F> IntoEnsureError for F
where
    F: FnOnce(&str) -> Error,
{
    #[inline]
    fn into_ensure_error(self, label: &str) -> Error {
        self(label)
    }
}
