//! Ordered property registries.
//!
//! A [`PropertyRegistry<T>`] is the per-type list of reflected fields for `T`.
//! Insertion order is the enumeration and display order. Names are expected
//! to be unique, but nothing enforces it: [`PropertyRegistry::get`] returns
//! the first match.
//!
//! # Example
//!
//! ```
//! use reflekt_core::registry::PropertyRegistry;
//!
//! struct Player {
//!     health: i32,
//!     name: String,
//! }
//!
//! let mut registry = PropertyRegistry::<Player>::new();
//! registry
//!     .add("Health", "VisibleAnywhere", |p: &Player| &p.health)
//!     .add("Name", "EditAnywhere", |p: &Player| &p.name);
//!
//! let player = Player { health: 100, name: "Zoran".into() };
//! assert_eq!(
//!     registry.render_all(&player),
//!     "Property: Health | Type: i32 | Meta: VisibleAnywhere | Value: 100\n\
//!      Property: Name | Type: String | Meta: EditAnywhere | Value: Zoran\n"
//! );
//! ```

use crate::error::ReflectError;
use crate::kind::{PropertyType, PropertyValue};
use crate::property::PropertyDescriptor;
use std::io;

/// Ordered, append-only collection of property descriptors for `T`.
pub struct PropertyRegistry<T> {
    properties: Vec<PropertyDescriptor<T>>,
}

impl<T> Default for PropertyRegistry<T> {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
        }
    }
}

impl<T> core::fmt::Debug for PropertyRegistry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyRegistry")
            .field("type", &core::any::type_name::<T>())
            .field("properties", &self.names())
            .finish()
    }
}

impl<T: 'static> PropertyRegistry<T> {
    /// Appends a descriptor for a field of a rendered type (`i32`, `f32` or
    /// `String`).
    ///
    /// No validation is performed: duplicate names are kept, in order.
    pub fn add<F: PropertyType>(
        &mut self,
        name: &str,
        metadata: &str,
        get: fn(&T) -> &F,
    ) -> &mut Self {
        self.push(PropertyDescriptor::new(name, metadata, get))
    }

    /// Appends a descriptor for a field of any other type.
    ///
    /// The property is listed by [`print_all`](Self::print_all) without a
    /// value.
    pub fn add_opaque<F: 'static>(
        &mut self,
        name: &str,
        metadata: &str,
        get: fn(&T) -> &F,
    ) -> &mut Self {
        self.push(PropertyDescriptor::opaque(name, metadata, get))
    }

    fn push(&mut self, descriptor: PropertyDescriptor<T>) -> &mut Self {
        tracing::trace!(
            reflecting = core::any::type_name::<T>(),
            name = descriptor.name(),
            type_tag = %descriptor.type_tag(),
            index = self.properties.len(),
            "property registered"
        );
        self.properties.push(descriptor);
        self
    }
}

impl<T> PropertyRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no properties are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor<T>> {
        self.properties.iter()
    }

    /// Returns the first descriptor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor<T>> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns property names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.properties.iter().map(PropertyDescriptor::name).collect()
    }

    /// Reads the current value of the property called `name` from `instance`.
    ///
    /// Returns `Ok(None)` when the property exists but its type is not
    /// rendered.
    ///
    /// # Errors
    ///
    /// [`ReflectError::UnknownProperty`] if no property has that name.
    pub fn value<'a>(
        &self,
        instance: &'a T,
        name: &str,
    ) -> Result<Option<PropertyValue<'a>>, ReflectError> {
        let descriptor = self.get(name).ok_or_else(|| ReflectError::UnknownProperty {
            type_name: core::any::type_name::<T>(),
            name: name.to_owned(),
        })?;
        Ok(descriptor.read(instance))
    }

    /// Renders every property of `instance`, one line each, in insertion
    /// order.
    #[must_use]
    pub fn render_all(&self, instance: &T) -> String {
        let mut out = String::new();
        for descriptor in &self.properties {
            // Writing into a `String` cannot fail.
            let _ = descriptor.render(instance, &mut out);
            out.push('\n');
        }
        out
    }

    /// Writes every property of `instance` to `out`, one line each, in
    /// insertion order.
    ///
    /// Values are read when this is called, so changes made to `instance`
    /// after registration are reflected.
    ///
    /// # Errors
    ///
    /// [`ReflectError::Io`] if writing to `out` fails.
    pub fn print_all(&self, instance: &T, out: &mut impl io::Write) -> Result<(), ReflectError> {
        let mut line = String::new();
        for descriptor in &self.properties {
            line.clear();
            let _ = descriptor.render(instance, &mut line);
            writeln!(out, "{line}")?;
        }
        tracing::trace!(
            reflecting = core::any::type_name::<T>(),
            count = self.properties.len(),
            "properties printed"
        );
        Ok(())
    }
}

impl<'r, T> IntoIterator for &'r PropertyRegistry<T> {
    type Item = &'r PropertyDescriptor<T>;
    type IntoIter = core::slice::Iter<'r, PropertyDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
