//! Primitive classification and type inspection
//!
//! Pure functions over [`Value`]. None of them keep state or panic, and
//! they depend on nothing beyond the value and class model.
//!
//! ## Known Limitation
//!
//! [`is_primitive_of`] decides "bare form of `T`" by constructing a
//! zero-argument instance of the value's own class. Classes that cannot be
//! constructed without arguments (the builtin `Symbol` and `BigInt`, and
//! any class made with [`crate::Class::requiring_arguments`]) therefore
//! never match, so a bare symbol or big integer is never unified with its
//! boxed type even in lenient mode. Such values must be boxed explicitly.

use crate::class::{builtins, TypeDescriptor};
use crate::value::Value;
use crate::void::Void;

/// Whether `value` is a primitive
///
/// | Input | Result |
/// |-------|--------|
/// | `Undefined` | true |
/// | `Null` | false |
/// | bare primitive | true |
/// | boxed primitive | false |
/// | object | false |
pub fn is_primitive(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Primitive(_))
}

/// Whether `value` is the bare embodiment of `ty`
///
/// With `strict`, only bare primitives can match; without it, objects are
/// tested the same way. The match itself is an instance-of check of a
/// zero-argument instance of the value's class against `ty`.
pub fn is_primitive_of(value: &Value, ty: &TypeDescriptor, strict: bool) -> bool {
    if value.is_undefined() || (!is_primitive(value) && strict) || ty.is_void() {
        return false;
    }
    let Some(class) = value.class() else {
        return false;
    };
    match class.construct() {
        Ok(instance) => ty.is_instance(&instance),
        Err(err) => {
            tracing::trace!(class = %class, error = %err, "zero-argument construction unavailable");
            false
        }
    }
}

/// Runtime type name of `value`
///
/// With `custom_names`, `Undefined` is `"void"` and bare primitives use
/// their short names (`"number"`, `"string"`, `"bool"`, `"symbol"`,
/// `"bigint"`). Without it, `Undefined` is `"undefined"` and everything
/// else reports its class name. `Null` reports `"Object"` either way.
pub fn type_name(value: &Value, custom_names: bool) -> String {
    match value {
        Value::Undefined if custom_names => "void".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => builtins::object().name().to_string(),
        Value::Primitive(p) if custom_names => p.short_name().to_string(),
        Value::Primitive(p) | Value::Boxed(p) => p.class().name().to_string(),
        Value::Object(instance) => instance.class().name().to_string(),
    }
}

/// Type identity of `value`
///
/// `Undefined` belongs to the sentinel, `Null` to `Object`.
pub fn type_class(value: &Value) -> TypeDescriptor {
    match value.class() {
        Some(class) => TypeDescriptor::Class(class),
        None if value.is_undefined() => Void::descriptor(),
        None => TypeDescriptor::Class(builtins::object()),
    }
}
