use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{Arc, String, ToString};
use crate::types::ExtensionData;

/// Shared handle to a caught fault.
pub type SharedFault = Arc<dyn core::error::Error + Send + Sync + 'static>;

/// A caught runtime fault wrapped for uniform handling.
///
/// The type tag defaults to the fault's Rust type name and the message to its
/// `Display` output. The original fault is retained, so
/// [`Error::to_std_error`](crate::Error::to_std_error) can hand it back unchanged.
///
/// # Examples
///
/// ```
/// use outcome_rail::ExceptionalError;
///
/// let parse = "x1".parse::<u8>().unwrap_err();
/// let err = ExceptionalError::from_fault(parse);
///
/// assert!(err.error_type().ends_with("ParseIntError"));
/// assert_eq!(err.message(), "invalid digit found in string");
/// assert!(err.cause().is_some());
/// ```
#[derive(Clone)]
pub struct ExceptionalError {
    error_type: String,
    message: String,
    extension_data: ExtensionData,
    cause: Option<SharedFault>,
}

impl ExceptionalError {
    /// Creates an exceptional error without an underlying fault.
    ///
    /// Used when the fault only exists in serialized form.
    #[inline]
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            extension_data: ExtensionData::new(),
            cause: None,
        }
    }

    /// Wraps `fault`, taking its type name and display message.
    pub fn from_fault<E>(fault: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        let message = fault.to_string();
        Self::from_fault_with_message(message, fault)
    }

    /// Wraps `fault` but reports `message` instead of the fault's own text.
    ///
    /// Handy for sanitising what callers see while keeping the fault for diagnostics.
    pub fn from_fault_with_message<E>(message: impl Into<String>, fault: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self {
            error_type: String::from(core::any::type_name::<E>()),
            message: message.into(),
            extension_data: ExtensionData::new(),
            cause: Some(Arc::new(fault)),
        }
    }

    /// Wraps an already shared fault under an explicit type tag.
    pub fn from_shared(error_type: impl Into<String>, fault: SharedFault) -> Self {
        Self {
            error_type: error_type.into(),
            message: fault.to_string(),
            extension_data: ExtensionData::new(),
            cause: Some(fault),
        }
    }

    /// Copies out-of-band key/value data gathered alongside the fault.
    ///
    /// Pairs with an empty key or an empty value are skipped.
    #[must_use]
    pub fn with_extension_data<I, K, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in data {
            let (key, value) = (key.into(), value.into());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            self.extension_data.insert(key, value);
        }
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

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extension_data.get(key).map(String::as_str)
    }

    /// The wrapped fault, when this error was built from one.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[inline]
    pub(crate) fn shared_cause(&self) -> Option<&SharedFault> {
        self.cause.as_ref()
    }
}

impl fmt::Debug for ExceptionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionalError")
            .field("error_type", &self.error_type)
            .field("message", &self.message)
            .field("extension_data", &self.extension_data)
            .field("cause", &self.cause.as_ref().map(|c| c.to_string()))
            .finish()
    }
}

impl fmt::Display for ExceptionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl PartialEq for ExceptionalError {
    fn eq(&self, other: &Self) -> bool {
        self.error_type == other.error_type && self.message == other.message
    }
}

impl Eq for ExceptionalError {}

impl PartialOrd for ExceptionalError {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExceptionalError {
    fn cmp(&self, other: &Self) -> Ordering {
        self.error_type
            .cmp(&other.error_type)
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl Hash for ExceptionalError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error_type.hash(state);
        self.message.hash(state);
    }
}
