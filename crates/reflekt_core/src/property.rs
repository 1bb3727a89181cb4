//! Property descriptors.
//!
//! A [`PropertyDescriptor`] records a field's name, [`TypeTag`] and metadata,
//! plus a typed accessor that reads the field from an instance handed in at
//! read time. Descriptors never hold a reference into an instance, so a
//! registry can outlive every instance it describes.

use crate::kind::{PropertyType, PropertyValue, TypeTag};
use core::any::Any;
use core::fmt;

/// Reads one field out of an instance of `T`.
///
/// Accessors are created internally by
/// [`PropertyRegistry::add`](crate::registry::PropertyRegistry::add) and
/// [`PropertyRegistry::add_opaque`](crate::registry::PropertyRegistry::add_opaque).
pub trait Accessor<T>: Send + Sync {
    /// Reads the current value, or `None` if the field type is not rendered.
    fn read<'a>(&self, instance: &'a T) -> Option<PropertyValue<'a>>;

    /// Returns the field itself, type-erased.
    fn field<'a>(&self, instance: &'a T) -> &'a dyn Any;
}

/// Accessor for a field whose type implements [`PropertyType`].
struct FieldAccessor<T, F> {
    get: fn(&T) -> &F,
}

impl<T, F: PropertyType> Accessor<T> for FieldAccessor<T, F> {
    fn read<'a>(&self, instance: &'a T) -> Option<PropertyValue<'a>> {
        Some((self.get)(instance).property_value())
    }

    fn field<'a>(&self, instance: &'a T) -> &'a dyn Any {
        (self.get)(instance)
    }
}

/// Accessor for a field of any other type.
struct OpaqueAccessor<T, F> {
    get: fn(&T) -> &F,
}

impl<T, F: 'static> Accessor<T> for OpaqueAccessor<T, F> {
    fn read<'a>(&self, _instance: &'a T) -> Option<PropertyValue<'a>> {
        None
    }

    fn field<'a>(&self, instance: &'a T) -> &'a dyn Any {
        (self.get)(instance)
    }
}

/// One reflected field of `T`.
pub struct PropertyDescriptor<T> {
    name: String,
    type_tag: TypeTag,
    metadata: String,
    accessor: Box<dyn Accessor<T>>,
}

impl<T: 'static> PropertyDescriptor<T> {
    /// Creates a descriptor for a rendered field type.
    pub fn new<F: PropertyType>(name: &str, metadata: &str, get: fn(&T) -> &F) -> Self {
        Self {
            name: name.to_owned(),
            type_tag: F::TYPE_TAG,
            metadata: metadata.to_owned(),
            accessor: Box::new(FieldAccessor { get }),
        }
    }

    /// Creates a descriptor for a field type the registry lists but does not
    /// render.
    pub fn opaque<F: 'static>(name: &str, metadata: &str, get: fn(&T) -> &F) -> Self {
        Self {
            name: name.to_owned(),
            type_tag: TypeTag::unrecognized::<F>(),
            metadata: metadata.to_owned(),
            accessor: Box::new(OpaqueAccessor { get }),
        }
    }
}

impl<T> PropertyDescriptor<T> {
    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type tag recorded at registration.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        self.type_tag
    }

    /// The free-form metadata string. Never interpreted.
    #[must_use]
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Reads the field's current value from `instance`.
    ///
    /// Returns `None` for unrecognized kinds.
    #[must_use]
    pub fn read<'a>(&self, instance: &'a T) -> Option<PropertyValue<'a>> {
        self.accessor.read(instance)
    }

    /// Borrows the field as `F`, or `None` if the field has another type.
    #[must_use]
    pub fn downcast_ref<'a, F: 'static>(&self, instance: &'a T) -> Option<&'a F> {
        self.accessor.field(instance).downcast_ref::<F>()
    }

    /// Writes the display line for this property, without a line terminator.
    pub fn render(&self, instance: &T, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "Property: {} | Type: {} | Meta: {}",
            self.name, self.type_tag, self.metadata
        )?;
        if let Some(value) = self.read(instance) {
            write!(f, " | Value: {value}")?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("type_tag", &self.type_tag)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
