//! Core types for blueprint-checked objects
//!
//! This crate defines:
//! - Value: the dynamic value domain, with bare and boxed primitives
//! - Class / TypeDescriptor: nominal type identities and builtins
//! - Void: the uninstantiable absence sentinel
//! - classify: primitive classification and type inspection
//! - Blueprint: frozen field-name to type declarations
//! - TypedObject: the sealed, type-checked object
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blueprint;
pub mod class;
pub mod classify;
pub mod error;
pub mod typed_object;
pub mod value;
pub mod void;

pub use blueprint::{Blueprint, BlueprintBuilder};
pub use class::{builtins, Class, TypeDescriptor};
pub use classify::{is_primitive, is_primitive_of, type_class, type_name};
pub use error::{Error, Result, SentinelError, TypeLabel};
pub use typed_object::{Options, TypedObject};
pub use value::{Instance, Primitive, Symbol, Value};
pub use void::Void;
