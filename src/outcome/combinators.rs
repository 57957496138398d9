//! Short-circuiting combinators and binary appends.
//!
//! `map`, `bind`, `match_with`, `tap`, `tap_failure` and `try_recover` look at one
//! outcome and run at most one callback. The `append*`/`zip*`/`extend*` family grows
//! the success value; the variants taking a second outcome accumulate the errors of
//! both sides, the lazy and plain-value variants stop at the first failure.
use super::{not_initialized, Outcome, TupleAppend};
use crate::error::Error;
use crate::types::ErrorAccumulator;

impl<T> Outcome<T> {
    /// Transforms the success value; a failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(21).map(|x| x * 2), Outcome::success(42));
    ///
    /// let failed: Outcome<i32> = Outcome::failure("nope");
    /// assert!(failed.map(|x| x * 2).is_failure());
    /// ```
    #[inline]
    #[track_caller]
    pub fn map<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> R,
    {
        match self.settle("self") {
            Ok(value) => Outcome::success(f(value)),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: i32) -> Outcome<i32> {
    ///     if x % 2 == 0 {
    ///         Outcome::success(x / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).bind(half).bind(half), Outcome::success(2));
    /// assert!(Outcome::success(6).bind(half).bind(half).is_failure());
    /// ```
    #[inline]
    #[track_caller]
    pub fn bind<R, F>(self, f: F) -> Outcome<R>
    where
        F: FnOnce(T) -> Outcome<R>,
    {
        match self.settle("self") {
            Ok(value) => f(value),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Eliminates the outcome into a plain value; exactly one branch runs.
    #[inline]
    #[track_caller]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.settle("self") {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Runs `f` on the success value and returns the outcome unchanged.
    #[inline]
    #[track_caller]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = self.peek("self") {
            f(value);
        }
        self
    }

    /// Runs `f` on the failure error and returns the outcome unchanged.
    #[inline]
    #[track_caller]
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Err(error) = self.peek("self") {
            f(error);
        }
        self
    }

    /// Replaces a failure with the outcome produced by `recover`.
    ///
    /// A success passes through and `recover` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let cached = Outcome::<&str>::failure("cache miss").try_recover(|_| Outcome::success("db"));
    /// assert_eq!(cached, Outcome::success("db"));
    /// ```
    #[inline]
    #[track_caller]
    pub fn try_recover<F>(self, recover: F) -> Self
    where
        F: FnOnce(Error) -> Outcome<T>,
    {
        match self.settle("self") {
            Ok(value) => Outcome::success(value),
            Err(error) => recover(error),
        }
    }

    /// Joins a second outcome, growing the success tuple by its value.
    ///
    /// Both sides are inspected: when both fail their errors are aggregated in
    /// order, when one fails its error is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let both = Outcome::success((1,)).append(Outcome::success("two"));
    /// assert_eq!(both, Outcome::success((1, "two")));
    ///
    /// let neither = Outcome::<(i32,)>::failure("a").append(Outcome::<&str>::failure("b"));
    /// assert_eq!(neither.error().map(|e| e.count()), Some(2));
    /// ```
    #[track_caller]
    pub fn append<R>(self, next: Outcome<R>) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
    {
        Outcome::from_parts(join(self, next).map(|(value, extra)| value.append(extra)))
    }

    /// Joins a second outcome without a value, keeping the current success value.
    #[track_caller]
    pub fn append_unit(self, next: Outcome) -> Outcome<T> {
        Outcome::from_parts(join(self, next).map(|(value, ())| value))
    }

    /// Pairs two plain values; errors accumulate like [`append`](Self::append).
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let pair = Outcome::success(1).zip(Outcome::success('x')).append(Outcome::success(2.0));
    /// assert_eq!(pair, Outcome::success((1, 'x', 2.0)));
    /// ```
    #[track_caller]
    pub fn zip<R>(self, next: Outcome<R>) -> Outcome<(T, R)> {
        Outcome::from_parts(join(self, next))
    }

    /// Grows the success tuple by a plain value; a failure short-circuits.
    #[inline]
    #[track_caller]
    pub fn append_value<R>(self, value: R) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
    {
        self.map(|current| current.append(value))
    }

    /// Grows the success tuple with an outcome that is only computed on success.
    #[track_caller]
    pub fn append_with<R, F>(self, next: F) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
        F: FnOnce() -> Outcome<R>,
    {
        self.bind(|current| match next().settle("next") {
            Ok(extra) => Outcome::success(current.append(extra)),
            Err(error) => Outcome::failure(error),
        })
    }

    /// Computes one more value from the current ones and appends it.
    ///
    /// `f` only runs on success; its failure becomes the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let user = Outcome::success((7_u32, "ada"))
    ///     .extend(|(id, _)| Outcome::success(format!("user-{id}")));
    /// assert_eq!(user, Outcome::success((7, "ada", "user-7".to_string())));
    /// ```
    #[track_caller]
    pub fn extend<R, F>(self, f: F) -> Outcome<T::Output>
    where
        T: TupleAppend<R>,
        F: FnOnce(&T) -> Outcome<R>,
    {
        self.bind(|current| match f(&current).settle("extension") {
            Ok(extra) => Outcome::success(current.append(extra)),
            Err(error) => Outcome::failure(error),
        })
    }

    /// Pairs the current value with one computed from it.
    #[track_caller]
    pub fn zip_with<R, F>(self, f: F) -> Outcome<(T, R)>
    where
        F: FnOnce(&T) -> Outcome<R>,
    {
        self.bind(|current| match f(&current).settle("extension") {
            Ok(extra) => Outcome::success((current, extra)),
            Err(error) => Outcome::failure(error),
        })
    }
}

/// Settles two outcomes, aggregating both errors when both failed.
#[track_caller]
pub(crate) fn join<A, B>(first: Outcome<A>, next: Outcome<B>) -> Result<(A, B), Error> {
    match (first.is_initialized(), next.is_initialized()) {
        (false, false) => not_initialized("self;next"),
        (false, true) => not_initialized("self"),
        (true, false) => not_initialized("next"),
        (true, true) => {}
    }

    match (first.settle("self"), next.settle("next")) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Ok(_), Err(error)) | (Err(error), Ok(_)) => Err(error),
        (Err(a), Err(b)) => {
            let mut errors = ErrorAccumulator::new();
            errors.push(a);
            errors.push(b);
            Err(errors.into_error().unwrap_or_default())
        }
    }
}
