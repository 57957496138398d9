use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::String;
use crate::types::ExtensionData;

/// Error type assigned by [`Error::new`](crate::Error::new) when the caller does not name one.
pub const DEFAULT_ERROR_TYPE: &str = "error";

/// An anticipated business-rule failure.
///
/// Identified by a string `type` tag and carrying a human readable message, both
/// of which are safe to show to callers. Optional extension data travels with the
/// error but does not take part in equality, ordering or hashing.
///
/// # Examples
///
/// ```
/// use outcome_rail::ExpectedError;
///
/// let err = ExpectedError::new("not_found", "user 42 does not exist")
///     .with_extension("user_id", "42");
///
/// assert_eq!(err.error_type(), "not_found");
/// assert_eq!(err.get("user_id"), Some("42"));
/// assert_eq!(err, ExpectedError::new("not_found", "user 42 does not exist"));
/// ```
#[derive(Debug, Clone)]
pub struct ExpectedError {
    error_type: String,
    message: String,
    extension_data: ExtensionData,
}

impl ExpectedError {
    /// Creates an expected error with an explicit type tag.
    #[inline]
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            extension_data: ExtensionData::new(),
        }
    }

    /// Creates an expected error tagged with [`DEFAULT_ERROR_TYPE`].
    #[inline]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(DEFAULT_ERROR_TYPE, message)
    }

    /// Attaches every key/value pair from `data`, replacing existing keys.
    #[must_use]
    pub fn with_extension_data<I, K, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extension_data
            .extend(data.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attaches a single key/value pair.
    #[must_use]
    #[inline]
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extension_data.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn extension_data(&self) -> &ExtensionData {
        &self.extension_data
    }

    /// Looks up a single extension value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extension_data.get(key).map(String::as_str)
    }
}

impl fmt::Display for ExpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl PartialEq for ExpectedError {
    fn eq(&self, other: &Self) -> bool {
        self.error_type == other.error_type && self.message == other.message
    }
}

impl Eq for ExpectedError {}

impl PartialOrd for ExpectedError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpectedError {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error_type
            .cmp(&other.error_type)
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl Hash for ExpectedError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error_type.hash(state);
        self.message.hash(state);
    }
}
