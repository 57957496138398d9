use crate::error::{push_flattened, Error, ManyErrors};
use crate::types::ErrorVec;

/// Collects errors from independent checks into one flat list.
///
/// Aggregates pushed into the accumulator are spliced in place and empty ones are
/// skipped, so [`into_error`](Self::into_error) and [`into_many`](Self::into_many)
/// never have to flatten again. Used by tuple combination and merging.
#[derive(Debug, Clone, Default)]
pub struct ErrorAccumulator {
    items: ErrorVec<Error>,
}

impl ErrorAccumulator {
    /// Creates a new empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Adds an error, splicing the children of an aggregate.
    #[inline]
    pub fn push(&mut self, error: Error) {
        push_flattened(&mut self.items, error);
    }

    /// Returns true if no error was collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of single errors collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Folds the collected errors like [`Error::many`]: `None` when nothing was
    /// collected, the error itself when exactly one was.
    pub fn into_error(self) -> Option<Error> {
        if self.items.is_empty() {
            None
        } else {
            Some(Error::many(self.items))
        }
    }

    /// Wraps every collected error in an aggregate, even a single one.
    #[inline]
    pub fn into_many(self) -> ManyErrors {
        ManyErrors::new(self.items)
    }
}

impl Extend<Error> for ErrorAccumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.push(error);
        }
    }
}

impl FromIterator<Error> for ErrorAccumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        let mut accumulator = Self::new();
        accumulator.extend(iter);
        accumulator
    }
}
