//! The absence sentinel
//!
//! `Void` marks a blueprint field as permanently valueless. It is
//! referenced, never instantiated: the type is uninhabited, so no value
//! of it can exist, and every dynamic attempt to build one, read a
//! property from it, or write a property to it fails.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `Void::construct()` | `SentinelError::Instantiation` |
//! | `Void::get("TYPE")` | `TypeDescriptor::Void` |
//! | `Void::get(other)` | `SentinelError::NoSuchProperty` |
//! | `Void::set(_, _)` | `SentinelError::Immutable` |

use crate::class::TypeDescriptor;
use crate::error::SentinelError;
use crate::value::Value;

/// Uninstantiable marker type for "intentionally no value"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Void {}

impl Void {
    /// Type name
    pub const NAME: &'static str = "Void";

    /// Name of the identity accessor
    pub const TYPE_KEY: &'static str = "TYPE";

    /// Attempt to instantiate the sentinel
    ///
    /// # Errors
    ///
    /// Always returns [`SentinelError::Instantiation`].
    pub fn construct() -> Result<Void, SentinelError> {
        Err(SentinelError::Instantiation)
    }

    /// Read a property of the sentinel type
    ///
    /// Only the identity accessor exists.
    pub fn get(key: &str) -> Result<TypeDescriptor, SentinelError> {
        if key == Self::TYPE_KEY {
            return Ok(TypeDescriptor::Void);
        }
        Err(SentinelError::NoSuchProperty(key.to_string()))
    }

    /// Write a property of the sentinel type
    ///
    /// # Errors
    ///
    /// Always returns [`SentinelError::Immutable`].
    pub fn set(_key: &str, _value: Value) -> Result<(), SentinelError> {
        Err(SentinelError::Immutable)
    }

    /// The sentinel as a blueprint entry
    pub fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Void
    }
}

impl From<Void> for TypeDescriptor {
    fn from(v: Void) -> Self {
        match v {}
    }
}
