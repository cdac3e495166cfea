//! Blueprints
//!
//! A blueprint maps field names to the type each field must hold. It is
//! frozen once built: there is no API to add, remove or retype a field,
//! and clones share the same declarations.
//!
//! Field order is declaration order. Redeclaring a name replaces its type
//! and keeps its original position.

use crate::class::{Class, TypeDescriptor};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Fields {
    entries: Vec<(String, TypeDescriptor)>,
    index: FxHashMap<String, usize>,
}

impl Fields {
    fn insert(&mut self, name: String, ty: TypeDescriptor) {
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = ty,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, ty));
            }
        }
    }
}

/// Immutable mapping from field name to declared type
#[derive(Debug, Clone, Default)]
pub struct Blueprint {
    fields: Arc<Fields>,
}

impl Blueprint {
    /// Start declaring fields
    pub fn builder() -> BlueprintBuilder {
        BlueprintBuilder::default()
    }

    /// Declared type of `name`
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.slot(name).map(|slot| self.declared_at(slot))
    }

    /// Check if `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.fields.index.contains_key(name)
    }

    /// Position of `name` in declaration order
    pub(crate) fn slot(&self, name: &str) -> Option<usize> {
        self.fields.index.get(name).copied()
    }

    pub(crate) fn declared_at(&self, slot: usize) -> &TypeDescriptor {
        &self.fields.entries[slot].1
    }

    /// Field names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Declarations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.fields.entries.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.entries.len()
    }

    /// Check if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TypeDescriptor)> for Blueprint {
    fn from_iter<I: IntoIterator<Item = (K, TypeDescriptor)>>(iter: I) -> Self {
        let mut fields = Fields::default();
        for (name, ty) in iter {
            fields.insert(name.into(), ty);
        }
        Blueprint {
            fields: Arc::new(fields),
        }
    }
}

/// Builder for [`Blueprint`]
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    fields: Fields,
}

impl BlueprintBuilder {
    /// Declare a field holding instances of `class`
    pub fn field(mut self, name: impl Into<String>, class: &Class) -> Self {
        self.fields.insert(name.into(), TypeDescriptor::Class(class.clone()));
        self
    }

    /// Declare a permanently valueless field
    pub fn void_field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), TypeDescriptor::Void);
        self
    }

    /// Declare a field with an explicit descriptor
    pub fn declare(mut self, name: impl Into<String>, ty: TypeDescriptor) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Freeze the declarations
    pub fn build(self) -> Blueprint {
        Blueprint {
            fields: Arc::new(self.fields),
        }
    }
}
