//! Nominal type identities
//!
//! This module defines:
//! - Class: a named, nominal type with an optional parent
//! - TypeDescriptor: what a blueprint entry declares (a class or `Void`)
//! - builtins: the process-wide builtin classes
//!
//! ## Identity
//!
//! Classes compare by identity, never by name. Two classes created with
//! the same name are different types, exactly like two distinct class
//! declarations in a dynamic host.
//!
//! ## Builtin Hierarchy
//!
//! | Class | Parent | Zero-arg construction |
//! |-------|--------|-----------------------|
//! | Object | - | yes |
//! | Number | Object | yes |
//! | String | Object | yes |
//! | Boolean | Object | yes |
//! | Symbol | Object | no |
//! | BigInt | Object | no |

use crate::error::{Error, Result};
use crate::value::{Instance, Primitive, Value};
use crate::void::Void;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct ClassInner {
    name: String,
    parent: Option<Class>,
    constructor: Constructor,
}

/// What zero-argument construction of a class produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constructor {
    /// Plain instance with no fields
    Instance,
    /// Boxed default primitive (builtin wrapper classes)
    Boxed(BoxedKind),
    /// Construction requires arguments
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxedKind {
    Number,
    String,
    Bool,
}

/// A nominal type identity
///
/// Cheap to clone; clones share identity.
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// Create a class extending `Object`, constructible without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), Some(builtins::object()), Constructor::Instance)
    }

    /// Create a class extending `parent`
    pub fn extending(name: impl Into<String>, parent: &Class) -> Self {
        Self::build(name.into(), Some(parent.clone()), Constructor::Instance)
    }

    /// Create a class whose construction requires arguments
    ///
    /// Such a class never satisfies a zero-argument construction, which
    /// matters for [`crate::is_primitive_of`].
    pub fn requiring_arguments(name: impl Into<String>, parent: Option<&Class>) -> Self {
        let parent = parent.cloned().or_else(|| Some(builtins::object()));
        Self::build(name.into(), parent, Constructor::None)
    }

    fn build(name: String, parent: Option<Class>, constructor: Constructor) -> Self {
        Class(Arc::new(ClassInner {
            name,
            parent,
            constructor,
        }))
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Direct parent, `None` only for the root `Object` class
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// True if this class is `other` or inherits from it
    pub fn extends(&self, other: &Class) -> bool {
        let mut current = Some(self);
        while let Some(class) = current {
            if class == other {
                return true;
            }
            current = class.parent();
        }
        false
    }

    /// Whether `construct()` can succeed
    pub fn is_default_constructible(&self) -> bool {
        self.0.constructor != Constructor::None
    }

    /// Construct a zero-argument instance of this class
    ///
    /// Builtin wrapper classes produce their boxed default (`0`, `""`,
    /// `false`); user classes produce an instance without fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConstructible`] for classes that need
    /// arguments, including the builtin `Symbol` and `BigInt`.
    pub fn construct(&self) -> Result<Value> {
        match self.0.constructor {
            Constructor::Instance => Ok(Value::Object(Instance::new(self.clone()))),
            Constructor::Boxed(BoxedKind::Number) => Ok(Value::Boxed(Primitive::Number(0.0))),
            Constructor::Boxed(BoxedKind::String) => {
                Ok(Value::Boxed(Primitive::String(String::new())))
            }
            Constructor::Boxed(BoxedKind::Bool) => Ok(Value::Boxed(Primitive::Bool(false))),
            Constructor::None => Err(Error::NotConstructible(self.name().to_string())),
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The type a blueprint declares for a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// Values must be instances of this class (or null)
    Class(Class),
    /// The field is permanently valueless
    Void,
}

impl TypeDescriptor {
    /// Declared type name, as used in error messages
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Class(class) => class.name(),
            TypeDescriptor::Void => Void::NAME,
        }
    }

    /// Check if this is the absence sentinel
    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Void)
    }

    /// Get the class if this is not the sentinel
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            TypeDescriptor::Class(class) => Some(class),
            TypeDescriptor::Void => None,
        }
    }

    /// Instance-of check
    ///
    /// True iff `value` is a boxed primitive or an object whose class is,
    /// or extends, the declared class. Bare primitives, `Null` and
    /// `Undefined` are never instances, and nothing is an instance of
    /// `Void`.
    pub fn is_instance(&self, value: &Value) -> bool {
        match (self, value.class()) {
            (TypeDescriptor::Class(class), Some(own)) if value.is_object_like() => {
                own.extends(class)
            }
            _ => false,
        }
    }
}

impl From<Class> for TypeDescriptor {
    fn from(class: Class) -> Self {
        TypeDescriptor::Class(class)
    }
}

impl From<&Class> for TypeDescriptor {
    fn from(class: &Class) -> Self {
        TypeDescriptor::Class(class.clone())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builtin classes
///
/// Each accessor returns a handle to the same process-wide class, so
/// `builtins::number() == builtins::number()` always holds.
pub mod builtins {
    use super::{BoxedKind, Class, ClassInner, Constructor};
    use once_cell::sync::Lazy;
    use std::sync::Arc;

    static OBJECT: Lazy<Class> = Lazy::new(|| {
        Class(Arc::new(ClassInner {
            name: "Object".to_string(),
            parent: None,
            constructor: Constructor::Instance,
        }))
    });

    static NUMBER: Lazy<Class> =
        Lazy::new(|| builtin("Number", Constructor::Boxed(BoxedKind::Number)));
    static STRING: Lazy<Class> =
        Lazy::new(|| builtin("String", Constructor::Boxed(BoxedKind::String)));
    static BOOLEAN: Lazy<Class> =
        Lazy::new(|| builtin("Boolean", Constructor::Boxed(BoxedKind::Bool)));
    static SYMBOL: Lazy<Class> = Lazy::new(|| builtin("Symbol", Constructor::None));
    static BIGINT: Lazy<Class> = Lazy::new(|| builtin("BigInt", Constructor::None));

    fn builtin(name: &str, constructor: Constructor) -> Class {
        Class(Arc::new(ClassInner {
            name: name.to_string(),
            parent: Some(OBJECT.clone()),
            constructor,
        }))
    }

    /// Root of every class hierarchy
    pub fn object() -> Class {
        OBJECT.clone()
    }

    /// Wrapper class of numeric primitives
    pub fn number() -> Class {
        NUMBER.clone()
    }

    /// Wrapper class of textual primitives
    pub fn string() -> Class {
        STRING.clone()
    }

    /// Wrapper class of boolean primitives
    pub fn boolean() -> Class {
        BOOLEAN.clone()
    }

    /// Wrapper class of symbols
    pub fn symbol() -> Class {
        SYMBOL.clone()
    }

    /// Wrapper class of big integers
    pub fn bigint() -> Class {
        BIGINT.clone()
    }
}
