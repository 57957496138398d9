//! Error-accumulating combinators.
//!
//! Unlike [`bind`](Outcome::bind), these look at every input before deciding: the
//! result succeeds only when all inputs succeed, and otherwise carries the errors
//! of every failing input in input order.
use super::{not_initialized, Outcome, State};
use crate::error::{Error, ManyErrors};
use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorAccumulator;

/// A tuple of outcomes that can be combined into an outcome of a tuple.
///
/// Implemented for tuples of up to six outcomes. A unit outcome keeps its `()`
/// position in the resulting tuple.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Combine, Outcome};
///
/// let ok = (Outcome::success(1), Outcome::success("a")).combine();
/// assert_eq!(ok, Outcome::success((1, "a")));
///
/// let failed = (
///     Outcome::<i32>::failure("first"),
///     Outcome::success("a"),
///     Outcome::<bool>::failure("third"),
/// )
///     .combine();
/// let messages: Vec<_> = failed.error().unwrap().iter().map(|e| e.message()).collect();
/// assert_eq!(messages, ["first", "third"]);
/// ```
pub trait Combine {
    type Output;

    fn combine(self) -> Outcome<Self::Output>;
}

/// Function form of [`Combine::combine`].
#[inline]
#[track_caller]
pub fn combine<C: Combine>(outcomes: C) -> Outcome<C::Output> {
    outcomes.combine()
}

impl Combine for () {
    type Output = ();

    #[inline]
    fn combine(self) -> Outcome<()> {
        Outcome::unit()
    }
}

macro_rules! impl_combine {
    ($($name:ident => $var:ident),+) => {
        impl<$($name),+> Combine for ($(Outcome<$name>,)+) {
            type Output = ($($name,)+);

            #[track_caller]
            fn combine(self) -> Outcome<Self::Output> {
                let ($($var,)+) = self;

                let mut missing = String::new();
                $(
                    if !$var.is_initialized() {
                        if !missing.is_empty() {
                            missing.push(';');
                        }
                        missing.push_str(stringify!($var));
                    }
                )+
                if !missing.is_empty() {
                    not_initialized(missing);
                }

                let mut errors = ErrorAccumulator::new();
                $(
                    let $var = match $var.state {
                        State::Success(value) => Some(value),
                        State::Failure(error) => {
                            errors.push(error);
                            None
                        }
                        State::Uninitialized => None,
                    };
                )+

                match ($($var,)+) {
                    ($(Some($var),)+) => Outcome::success(($($var,)+)),
                    _ => Outcome::failure(errors.into_error().unwrap_or_default()),
                }
            }
        }
    };
}

impl_combine!(A => r1);
impl_combine!(A => r1, B => r2);
impl_combine!(A => r1, B => r2, C => r3);
impl_combine!(A => r1, B => r2, C => r3, D => r4);
impl_combine!(A => r1, B => r2, C => r3, D => r4, E => r5);
impl_combine!(A => r1, B => r2, C => r3, D => r4, E => r5, F => r6);

impl<T> Outcome<T> {
    /// Merges a sequence of outcomes into an outcome of all their values.
    ///
    /// Succeeds with the values in order when no element failed. Otherwise fails
    /// with a [`ManyErrors`] holding every failure in order, even when there is
    /// only one. An empty sequence succeeds with an empty vector.
    ///
    /// # Panics
    ///
    /// Panics when any element is uninitialized, before errors are aggregated.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let all = Outcome::merge(vec![Outcome::success(1), Outcome::success(2)]);
    /// assert_eq!(all, Outcome::success(vec![1, 2]));
    ///
    /// let some = Outcome::merge(vec![
    ///     Outcome::success(1),
    ///     Outcome::failure("bad"),
    ///     Outcome::success(3),
    /// ]);
    /// assert!(some.is_failure());
    /// ```
    #[track_caller]
    pub fn merge<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        merge_into(outcomes)
    }
}

#[track_caller]
pub(crate) fn merge_into<T, C, I>(outcomes: I) -> Outcome<C>
where
    I: IntoIterator<Item = Outcome<T>>,
    C: FromIterator<T>,
{
    let mut values = Vec::new();
    let mut failures: Vec<Error> = Vec::new();

    for outcome in outcomes {
        match outcome.state {
            State::Success(value) => {
                if failures.is_empty() {
                    values.push(value);
                }
            }
            State::Failure(error) => failures.push(error),
            State::Uninitialized => not_initialized("outcomes"),
        }
    }

    if failures.is_empty() {
        Outcome::success(values.into_iter().collect())
    } else {
        Outcome::failure(Error::Many(ManyErrors::new(failures)))
    }
}

/// Collecting outcomes merges them, see [`Outcome::merge`].
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        merge_into(iter)
    }
}
