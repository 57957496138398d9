use core::fmt;
use core::ops::Index;

use super::Error;
use crate::types::alloc_type::{String, Vec};

/// Type tag reported by every aggregate.
pub const MANY_ERRORS_TYPE: &str = "many_errors";

/// An ordered, flat collection of single errors.
///
/// A `ManyErrors` never holds another aggregate: every constructor splices the
/// children of nested aggregates in place and drops empty ones, so the list is
/// always made of [`Error::Expected`] and [`Error::Exceptional`] values only.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Error, ManyErrors};
///
/// let inner = ManyErrors::new([Error::new("a"), Error::new("b")]);
/// let outer = ManyErrors::new([Error::Many(inner), Error::new("c")]);
///
/// let messages: Vec<_> = outer.iter().map(|e| e.message()).collect();
/// assert_eq!(messages, ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManyErrors {
    errors: Vec<Error>,
    message: String,
}

impl ManyErrors {
    /// Collects `errors`, flattening nested aggregates and skipping empty ones.
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        let mut flat: Vec<Error> = Vec::new();
        for error in errors {
            push_flattened(&mut flat, error);
        }
        Self::from_flat(flat)
    }

    /// The aggregate with no children, identity element of [`Error::append`].
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the aggregate from a list that is already known to be flat.
    pub(crate) fn from_flat(errors: Vec<Error>) -> Self {
        debug_assert!(errors.iter().all(|e| !matches!(e, Error::Many(_))));

        let mut message = String::new();
        for (index, error) in errors.iter().enumerate() {
            if index > 0 {
                message.push('\n');
            }
            message.push_str(error.message());
        }
        Self { errors, message }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Children messages joined by new lines.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Error> {
        self.errors.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Error] {
        &self.errors
    }

    /// `true` when every child is an expected error.
    pub fn is_expected(&self) -> bool {
        self.errors.iter().all(Error::is_expected)
    }

    /// `true` when at least one child wraps a fault.
    pub fn is_exceptional(&self) -> bool {
        self.errors.iter().any(Error::is_exceptional)
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Error> {
        self.errors
    }
}

/// Appends `error` to `flat`, splicing aggregates and dropping empty ones.
pub(crate) fn push_flattened<C>(flat: &mut C, error: Error)
where
    C: Extend<Error>,
{
    match error {
        Error::Many(many) => flat.extend(many.errors),
        single => flat.extend(core::iter::once(single)),
    }
}

impl fmt::Display for ManyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl PartialEq for ManyErrors {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors
    }
}

impl Eq for ManyErrors {}

impl Index<usize> for ManyErrors {
    type Output = Error;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

impl IntoIterator for ManyErrors {
    type Item = Error;
    type IntoIter = crate::types::alloc_type::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ManyErrors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<Error> for ManyErrors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self::new(iter)
    }
}
