//! Error types for blueprint-checked objects
//!
//! This module defines all error types used throughout the crate.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! No operation retries or recovers internally: every failure is returned
//! to the caller, and a failed write never changes stored state.

use std::fmt;
use thiserror::Error;

/// Result type alias for blueprint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Runtime type of a rejected value, as reported in errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabel {
    /// Class name of the value
    pub name: String,
    /// Whether the value was a bare primitive
    pub primitive: bool,
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primitive {
            write!(f, "{}(primitive)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// Errors raised by blueprint-checked objects
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Key is not declared by the blueprint
    #[error("key '{0}' does not exist")]
    KeyNotDeclared(String),

    /// Value does not satisfy the declared type
    #[error("type {actual} does not match the required type {required}")]
    TypeMismatch {
        /// Runtime type of the rejected value
        actual: TypeLabel,
        /// Name of the declared type
        required: String,
    },

    /// Class cannot be constructed without arguments
    #[error("{0} can not be constructed without arguments")]
    NotConstructible(String),

    /// Misuse of the absence sentinel
    #[error(transparent)]
    Sentinel(#[from] SentinelError),
}

impl Error {
    /// Check if this is a missing-key error
    pub fn is_key_not_declared(&self) -> bool {
        matches!(self, Error::KeyNotDeclared(_))
    }

    /// Check if this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this is a sentinel violation
    pub fn is_sentinel_violation(&self) -> bool {
        matches!(self, Error::Sentinel(_))
    }
}

/// Misuse of the `Void` sentinel type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentinelError {
    /// Attempted to create an instance
    #[error("Void can not be instantiated")]
    Instantiation,

    /// Read of a property other than the identity accessor
    #[error("key '{0}' does not exist")]
    NoSuchProperty(String),

    /// Attempted to write a property
    #[error("properties of Void can not be set")]
    Immutable,
}
