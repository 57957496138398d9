//! Macros for starting validation chains.
//!
//! - [`macro@crate::ensure`] - Starts an [`Ensure`](crate::Ensure) chain, using the
//!   source text of the validated expression as its label.

/// Starts an [`Ensure`](crate::Ensure) chain for an expression.
///
/// With a single argument the label is the expression's source text, as written
/// at the call site. A second argument overrides the label.
///
/// # Examples
///
/// ```
/// use outcome_rail::ensure;
///
/// let retries = 0;
/// let checked = ensure!(retries).greater_than(0).result();
/// assert_eq!(
///     checked.error().unwrap().message(),
///     "Value {retries} is not greater than requirement."
/// );
///
/// let checked = ensure!(retries + 1, "attempts").less_than(3).result();
/// assert!(checked.is_success());
/// ```
#[macro_export]
macro_rules! ensure {
    ($value:expr $(,)?) => {
        $crate::Ensure::that($value, ::core::stringify!($value))
    };
    ($value:expr, $label:expr $(,)?) => {
        $crate::Ensure::that($value, $label)
    };
}
