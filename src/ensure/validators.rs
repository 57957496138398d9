use super::{Emptiable, Ensure, IntoEnsureError, Violation};

const IS_NULL: &str = "is null.";
const IS_NOT_NULL: &str = "is not null.";
const IS_EMPTY: &str = "is empty.";
const IS_WHITESPACE: &str = "is empty or consists exclusively of white-space characters.";
pub(crate) const NOT_SATISFIED: &str = "does not satisfy the requirement.";
const NOT_TRUE: &str = "is not true.";
const NOT_FALSE: &str = "is not false.";
const NOT_EQUAL: &str = "is not equal to requirement.";
const EQUAL: &str = "is equal to requirement.";
const NOT_LESS: &str = "is not less than requirement.";
const NOT_GREATER: &str = "is not greater than requirement.";
const GREATER: &str = "is greater than requirement.";
const LESS: &str = "is less than requirement.";

impl<T> Ensure<Option<T>> {
    /// Requires a value to be present and unwraps it.
    ///
    /// ```
    /// use outcome_rail::Ensure;
    ///
    /// let port = Ensure::that(Some(8080), "port").not_null().result();
    /// assert_eq!(port.into_value(), Some(8080));
    /// ```
    #[track_caller]
    pub fn not_null(self) -> Ensure<T> {
        self.not_null_or(Violation(IS_NULL))
    }

    #[track_caller]
    pub fn not_null_or(self, on_failure: impl IntoEnsureError) -> Ensure<T> {
        self.verify(|value| value, on_failure)
    }

    /// Requires the value to be absent.
    #[track_caller]
    pub fn is_none(self) -> Self {
        self.is_none_or(Violation(IS_NOT_NULL))
    }

    #[track_caller]
    pub fn is_none_or(self, on_failure: impl IntoEnsureError) -> Self {
        self.verify(|value| value.is_none().then_some(value), on_failure)
    }
}

impl<T: Emptiable> Ensure<T> {
    /// Rejects empty strings and collections.
    #[track_caller]
    pub fn not_empty(self) -> Self {
        self.not_empty_or(Violation(IS_EMPTY))
    }

    #[track_caller]
    pub fn not_empty_or(self, on_failure: impl IntoEnsureError) -> Self {
        self.verify(|value| (!value.is_empty_value()).then_some(value), on_failure)
    }
}

impl<T: AsRef<str>> Ensure<T> {
    /// Rejects strings that are empty or made only of white space.
    #[track_caller]
    pub fn not_whitespace(self) -> Self {
        self.not_whitespace_or(Violation(IS_WHITESPACE))
    }

    #[track_caller]
    pub fn not_whitespace_or(self, on_failure: impl IntoEnsureError) -> Self {
        self.verify(
            |value| (!value.as_ref().trim().is_empty()).then_some(value),
            on_failure,
        )
    }
}

impl Ensure<bool> {
    #[track_caller]
    pub fn is_true(self) -> Self {
        self.is_true_or(Violation(NOT_TRUE))
    }

    #[track_caller]
    pub fn is_true_or(self, on_failure: impl IntoEnsureError) -> Self {
        self.verify(|value| value.then_some(value), on_failure)
    }

    #[track_caller]
    pub fn is_false(self) -> Self {
        self.is_false_or(Violation(NOT_FALSE))
    }

    #[track_caller]
    pub fn is_false_or(self, on_failure: impl IntoEnsureError) -> Self {
        self.verify(|value| (!value).then_some(value), on_failure)
    }
}

impl<T> Ensure<T> {
    /// Requires `requirement` to hold for the value.
    ///
    /// ```
    /// use outcome_rail::{ensure, Error};
    ///
    /// let answer = 69;
    /// let checked = ensure!(answer).satisfies(|v| *v > 100).result();
    /// assert_eq!(
    ///     checked.into_error(),
    ///     Some(Error::with_type("EnsureFailed", "Value {answer} does not satisfy the requirement."))
    /// );
    /// ```
    #[track_caller]
    pub fn satisfies<P>(self, requirement: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.satisfies_or(requirement, Violation(NOT_SATISFIED))
    }

    #[track_caller]
    pub fn satisfies_or<P>(self, requirement: P, on_failure: impl IntoEnsureError) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.verify(|value| requirement(&value).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn equal_to<U>(self, requirement: U) -> Self
    where
        T: PartialEq<U>,
    {
        self.equal_to_or(requirement, Violation(NOT_EQUAL))
    }

    #[track_caller]
    pub fn equal_to_or<U>(self, requirement: U, on_failure: impl IntoEnsureError) -> Self
    where
        T: PartialEq<U>,
    {
        self.verify(|value| (value == requirement).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn not_equal_to<U>(self, requirement: U) -> Self
    where
        T: PartialEq<U>,
    {
        self.not_equal_to_or(requirement, Violation(EQUAL))
    }

    #[track_caller]
    pub fn not_equal_to_or<U>(self, requirement: U, on_failure: impl IntoEnsureError) -> Self
    where
        T: PartialEq<U>,
    {
        self.verify(|value| (value != requirement).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn less_than<U>(self, requirement: U) -> Self
    where
        T: PartialOrd<U>,
    {
        self.less_than_or(requirement, Violation(NOT_LESS))
    }

    #[track_caller]
    pub fn less_than_or<U>(self, requirement: U, on_failure: impl IntoEnsureError) -> Self
    where
        T: PartialOrd<U>,
    {
        self.verify(|value| (value < requirement).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn greater_than<U>(self, requirement: U) -> Self
    where
        T: PartialOrd<U>,
    {
        self.greater_than_or(requirement, Violation(NOT_GREATER))
    }

    #[track_caller]
    pub fn greater_than_or<U>(self, requirement: U, on_failure: impl IntoEnsureError) -> Self
    where
        T: PartialOrd<U>,
    {
        self.verify(|value| (value > requirement).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn less_than_or_equal_to<U>(self, requirement: U) -> Self
    where
        T: PartialOrd<U>,
    {
        self.less_than_or_equal_to_or(requirement, Violation(GREATER))
    }

    #[track_caller]
    pub fn less_than_or_equal_to_or<U>(
        self,
        requirement: U,
        on_failure: impl IntoEnsureError,
    ) -> Self
    where
        T: PartialOrd<U>,
    {
        self.verify(|value| (value <= requirement).then_some(value), on_failure)
    }

    #[track_caller]
    pub fn greater_than_or_equal_to<U>(self, requirement: U) -> Self
    where
        T: PartialOrd<U>,
    {
        self.greater_than_or_equal_to_or(requirement, Violation(LESS))
    }

    #[track_caller]
    pub fn greater_than_or_equal_to_or<U>(
        self,
        requirement: U,
        on_failure: impl IntoEnsureError,
    ) -> Self
    where
        T: PartialOrd<U>,
    {
        self.verify(|value| (value >= requirement).then_some(value), on_failure)
    }
}
