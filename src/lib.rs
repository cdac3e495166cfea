//! Blueprint - runtime schema-enforced objects
//!
//! A blueprint declares, for each field name, the type that field must
//! hold. A [`TypedObject`] built from it has exactly those fields and
//! checks every write against the declaration.
//!
//! # Quick Start
//!
//! ```
//! use blueprint::{builtins, Blueprint, TypedObject, Value};
//!
//! let point = Blueprint::builder()
//!     .field("x", &builtins::number())
//!     .field("y", &builtins::number())
//!     .void_field("z")
//!     .build();
//!
//! // Lenient objects accept bare literals for boxed types.
//! let mut p = TypedObject::new(point, false, [("x", Value::from(1))])?;
//! p.set("y", 2)?;
//!
//! assert_eq!(p.get("x")?, &Value::from(1));
//! assert!(p.set("z", 3).is_err());
//! assert!(p.get("w").is_err());
//! # Ok::<(), blueprint::Error>(())
//! ```
//!
//! # Architecture
//!
//! All functionality lives in `blueprint-core`; this crate re-exports its
//! public API.

// Re-export the public API from blueprint-core
pub use blueprint_core::*;
