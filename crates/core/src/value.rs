//! Value types for blueprint-checked objects
//!
//! This module defines:
//! - Value: the dynamic value domain fields are checked against
//! - Primitive: the five primitive kinds
//! - Symbol: unique, identity-compared tokens
//! - Instance: an object of some class with named fields
//!
//! ## Bare vs Boxed
//!
//! A primitive exists in two forms:
//! - `Value::Primitive(p)` is the bare form. It is not an instance of any
//!   class, not even `Number` for a number.
//! - `Value::Boxed(p)` is the same primitive wrapped as an object of its
//!   builtin class. It is an instance of that class and of `Object`.
//!
//! Plain Rust literals convert to the bare form:
//!
//! ```
//! use blueprint_core::{Primitive, Value};
//!
//! assert_eq!(Value::from(42), Value::Primitive(Primitive::Number(42.0)));
//! assert_eq!(Value::boxed(42), Value::Boxed(Primitive::Number(42.0)));
//! ```
//!
//! ## Equality
//!
//! - Numbers follow IEEE-754: `NaN != NaN`, `-0.0 == 0.0`
//! - Bare and boxed forms are never equal to each other
//! - Objects compare by class identity and fields

use crate::class::{builtins, Class};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Unique token, equal only to itself and its clones
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: Uuid,
    description: Option<String>,
}

impl Symbol {
    /// Create a new symbol, distinct from every other symbol
    pub fn new(description: Option<&str>) -> Self {
        Symbol {
            id: Uuid::new_v4(),
            description: description.map(str::to_string),
        }
    }

    /// Optional description given at creation
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

/// The five primitive kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// IEEE-754 double
    Number(f64),
    /// UTF-8 text
    String(String),
    /// Boolean
    Bool(bool),
    /// Unique token
    Symbol(Symbol),
    /// Arbitrary-size integer (bounded to i128 here)
    BigInt(i128),
}

impl Primitive {
    /// Builtin wrapper class of this primitive kind
    pub fn class(&self) -> Class {
        match self {
            Primitive::Number(_) => builtins::number(),
            Primitive::String(_) => builtins::string(),
            Primitive::Bool(_) => builtins::boolean(),
            Primitive::Symbol(_) => builtins::symbol(),
            Primitive::BigInt(_) => builtins::bigint(),
        }
    }

    /// Short lowercase name
    pub const fn short_name(&self) -> &'static str {
        match self {
            Primitive::Number(_) => "number",
            Primitive::String(_) => "string",
            Primitive::Bool(_) => "bool",
            Primitive::Symbol(_) => "symbol",
            Primitive::BigInt(_) => "bigint",
        }
    }
}

/// An object of some class
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: Class,
    fields: BTreeMap<String, Value>,
}

impl Instance {
    /// Create an instance with no fields
    pub fn new(class: Class) -> Self {
        Instance {
            class,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Class this object was created from
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Read a field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate over fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A dynamic value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of any value
    Undefined,
    /// The null value
    Null,
    /// Bare primitive
    Primitive(Primitive),
    /// Primitive wrapped as an object of its builtin class
    Boxed(Primitive),
    /// Object of some class
    Object(Instance),
}

impl Value {
    /// Box a primitive-convertible value
    ///
    /// Non-primitive inputs are returned unchanged.
    pub fn boxed(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Primitive(p) => Value::Boxed(p),
            other => other,
        }
    }

    /// Own class, `None` for `Undefined` and `Null`
    ///
    /// A bare primitive reports the class of its wrapper, which is the
    /// class its zero-argument constructor would build.
    pub fn class(&self) -> Option<Class> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Primitive(p) | Value::Boxed(p) => Some(p.class()),
            Value::Object(instance) => Some(instance.class().clone()),
        }
    }

    /// Check if this is the absence of a value
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this is a boxed primitive or an object
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Boxed(_) | Value::Object(_))
    }

    /// Get the primitive, bare or boxed
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) | Value::Boxed(p) => Some(p),
            _ => None,
        }
    }

    /// Get as f64 if this is a number, bare or boxed
    pub fn as_number(&self) -> Option<f64> {
        match self.as_primitive() {
            Some(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Get as &str if this is a string, bare or boxed
    pub fn as_str(&self) -> Option<&str> {
        match self.as_primitive() {
            Some(Primitive::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if this is a boolean, bare or boxed
    pub fn as_bool(&self) -> Option<bool> {
        match self.as_primitive() {
            Some(Primitive::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Get the instance if this is an object
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations produce bare primitives
// ============================================================================

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Primitive(Primitive::Number(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Primitive(Primitive::Number(n as f64))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::String(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Primitive(Primitive::Symbol(s))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::Primitive(Primitive::BigInt(n))
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Object(instance)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Undefined)
    }
}
