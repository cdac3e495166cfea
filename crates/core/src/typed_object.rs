//! Blueprint-checked objects
//!
//! A [`TypedObject`] holds exactly one value per blueprint field and checks
//! every write against the field's declared type. Reads only check that
//! the field exists; stored values were validated when written.
//!
//! ## Seeding
//!
//! A fresh object holds `Null` in every ordinary field and `Undefined` in
//! every `Void` field. Initial values are then applied through the same
//! checked write path as later mutation.
//!
//! ## Acceptance Rule
//!
//! A write of `value` to a field declared as `T` is accepted if any of:
//!
//! 1. `value` is `Undefined` and `T` is `Void`
//! 2. `value` is an instance of `T`
//! 3. the object is lenient and `value` is the bare form of `T`
//! 4. `value` is `Null` and `T` is not `Void`
//!
//! Anything else is a type mismatch and leaves the field untouched.
//!
//! ## Example
//!
//! ```
//! use blueprint_core::{builtins, Blueprint, TypedObject, Value};
//!
//! let person = Blueprint::builder()
//!     .field("name", &builtins::string())
//!     .field("age", &builtins::number())
//!     .build();
//!
//! let mut amy = TypedObject::new(person, true, [("name", Value::boxed("Amy"))])?;
//! assert_eq!(amy.get("age")?, &Value::Null);
//!
//! // Strict objects want the boxed form.
//! assert!(amy.set("age", 42).is_err());
//! amy.set("age", Value::boxed(42))?;
//! # Ok::<(), blueprint_core::Error>(())
//! ```

use crate::blueprint::Blueprint;
use crate::class::TypeDescriptor;
use crate::classify::{is_primitive, is_primitive_of, type_name};
use crate::error::{Error, Result, TypeLabel};
use crate::value::Value;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::mem;

/// Write policy of a [`TypedObject`]
///
/// # Example
///
/// ```toml
/// # Reject bare primitives where a boxed type is declared (default: true)
/// strict = true
/// ```
///
/// A missing or non-boolean `strict` falls back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Keep bare primitives and their boxed types apart
    #[serde(default = "default_strict", deserialize_with = "strict_or_default")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StrictFlag {
    Bool(bool),
    Other(IgnoredAny),
}

fn strict_or_default<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match StrictFlag::deserialize(deserializer)? {
        StrictFlag::Bool(strict) => Ok(strict),
        StrictFlag::Other(_) => Ok(default_strict()),
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: default_strict(),
        }
    }
}

impl Options {
    /// Strict policy
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Lenient policy: bare primitives satisfy their boxed types
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Object whose fields are fixed and type-checked by a blueprint
#[derive(Clone)]
pub struct TypedObject {
    blueprint: Blueprint,
    options: Options,
    // Aligned with blueprint declaration order.
    values: Vec<Value>,
}

impl TypedObject {
    /// Build an object from a blueprint, a strictness flag and initial values
    ///
    /// # Errors
    ///
    /// Fails with the first error raised while applying `base`:
    /// [`Error::KeyNotDeclared`] or [`Error::TypeMismatch`].
    pub fn new<K, I>(blueprint: Blueprint, strict: bool, base: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::with_options(blueprint, Options { strict }, base)
    }

    /// Build a strict object with every field at its seed value
    pub fn from_blueprint(blueprint: Blueprint) -> Self {
        let values = seed(&blueprint);
        TypedObject {
            blueprint,
            options: Options::default(),
            values,
        }
    }

    /// Build an object with explicit [`Options`]
    pub fn with_options<K, I>(blueprint: Blueprint, options: Options, base: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let values = seed(&blueprint);
        let mut object = TypedObject {
            blueprint,
            options,
            values,
        };
        for (key, value) in base {
            object.set(key.as_ref(), value)?;
        }
        tracing::debug!(
            fields = object.values.len(),
            strict = object.options.strict,
            "typed object constructed"
        );
        Ok(object)
    }

    /// Current value of `key`
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotDeclared`] if the blueprint has no such field.
    pub fn get(&self, key: &str) -> Result<&Value> {
        let slot = self.slot(key)?;
        Ok(&self.values[slot])
    }

    /// Write `value` to `key` after checking it against the blueprint
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotDeclared`] for unknown fields, [`Error::TypeMismatch`]
    /// if the value is not accepted. The stored value is unchanged on error.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.replace(key, value).map(drop)
    }

    /// Like [`TypedObject::set`], returning the previous value
    pub fn replace(&mut self, key: &str, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        let slot = self.slot(key)?;
        let declared = self.blueprint.declared_at(slot);

        if !self.accepts(declared, &value) {
            let err = mismatch(&value, declared);
            tracing::debug!(key, error = %err, "write rejected");
            return Err(err);
        }

        tracing::trace!(key, "write accepted");
        Ok(mem::replace(&mut self.values[slot], value))
    }

    fn accepts(&self, declared: &TypeDescriptor, value: &Value) -> bool {
        (value.is_undefined() && declared.is_void())
            || declared.is_instance(value)
            || (!self.options.strict && is_primitive_of(value, declared, false))
            || (value.is_null() && !declared.is_void())
    }

    fn slot(&self, key: &str) -> Result<usize> {
        self.blueprint.slot(key).ok_or_else(|| not_declared(key))
    }

    /// Blueprint this object enforces
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Whether bare primitives are kept apart from boxed types
    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// Write policy
    pub fn options(&self) -> Options {
        self.options
    }

    /// Check if `key` is a declared field
    pub fn contains_key(&self, key: &str) -> bool {
        self.blueprint.contains(key)
    }

    /// Field names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.blueprint.keys()
    }

    /// Fields and their current values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.blueprint.keys().zip(self.values.iter())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the blueprint declares no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for TypedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn seed(blueprint: &Blueprint) -> Vec<Value> {
    blueprint
        .iter()
        .map(|(_, ty)| match ty {
            TypeDescriptor::Void => Value::Undefined,
            TypeDescriptor::Class(_) => Value::Null,
        })
        .collect()
}

fn not_declared(key: &str) -> Error {
    Error::KeyNotDeclared(key.to_string())
}

fn mismatch(value: &Value, declared: &TypeDescriptor) -> Error {
    Error::TypeMismatch {
        actual: TypeLabel {
            name: type_name(value, false),
            primitive: is_primitive(value) && !value.is_undefined(),
        },
        required: declared.name().to_string(),
    }
}
