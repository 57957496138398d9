use core::fmt;

use crate::types::alloc_type::Cow;

/// Describes the use of a value that was never constructed.
///
/// `Outcome::default()` and `Ensure::default()` hold no state. Touching such a
/// value is a programming error: it panics with this type's `Display` text and is
/// never turned into an [`Error`](crate::Error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotInitialized {
    subject: &'static str,
    variable: Cow<'static, str>,
}

impl NotInitialized {
    pub fn new(subject: &'static str, variable: impl Into<Cow<'static, str>>) -> Self {
        Self { subject, variable: variable.into() }
    }

    /// Type of the value, `Outcome` or `Ensure`.
    #[inline]
    pub fn subject(&self) -> &str {
        self.subject
    }

    /// Name of the offending variable; several names are separated by `;`.
    #[inline]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl fmt::Display for NotInitialized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} was not properly initialized (variable: `{}`)",
            self.subject, self.variable
        )
    }
}

impl core::error::Error for NotInitialized {}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn not_initialized(variable: impl Into<Cow<'static, str>>) -> ! {
    panic!("{}", NotInitialized::new("Outcome", variable))
}

/// `true` when a panic message was produced by [`NotInitialized`].
#[cfg(feature = "std")]
pub(crate) fn is_not_initialized(message: &str) -> bool {
    message.contains(" was not properly initialized (variable: `")
}
