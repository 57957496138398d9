//! Conversion of [`Error`] values back into `core::error::Error` trait objects.

use core::fmt;

use super::exceptional::SharedFault;
use super::Error;
use crate::types::alloc_type::{Arc, String, Vec};

/// Standard error synthesized from an error that carries no original fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    error_type: String,
    message: String,
}

impl RaisedError {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error_type: error_type.into(), message: message.into() }
    }

    #[inline]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RaisedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for RaisedError {}

/// Several faults reported together, in the order of the aggregate they came from.
#[derive(Debug, Clone)]
pub struct AggregateError {
    faults: Vec<SharedFault>,
}

impl AggregateError {
    #[inline]
    pub fn faults(&self) -> &[SharedFault] {
        &self.faults
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors occurred", self.faults.len())?;
        for fault in &self.faults {
            write!(f, "\n  - {fault}")?;
        }
        Ok(())
    }
}

impl core::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.faults
            .first()
            .map(|fault| fault.as_ref() as &(dyn core::error::Error + 'static))
    }
}

impl Error {
    /// Converts this error into a standard error trait object.
    ///
    /// - an expected error becomes a [`RaisedError`] with the same type and message;
    /// - an exceptional error hands back its original fault, or a [`RaisedError`]
    ///   when it was built without one;
    /// - an aggregate becomes an [`AggregateError`] of its children, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, RaisedError};
    ///
    /// let fault = Error::with_type("conflict", "version mismatch").to_std_error();
    /// let raised = fault.downcast_ref::<RaisedError>().unwrap();
    /// assert_eq!(raised.error_type(), "conflict");
    /// ```
    pub fn to_std_error(&self) -> SharedFault {
        match self {
            Error::Expected(e) => Arc::new(RaisedError::new(e.error_type(), e.message())),
            Error::Exceptional(e) => match e.shared_cause() {
                Some(cause) => Arc::clone(cause),
                None => Arc::new(RaisedError::new(e.error_type(), e.message())),
            },
            Error::Many(many) => Arc::new(AggregateError {
                faults: many.iter().map(Error::to_std_error).collect(),
            }),
        }
    }
}
