//! The [`Reflect`] capability and per-type registry storage.
//!
//! A reflecting type implements [`Reflect`] to declare its properties once.
//! [`Registries`] owns one [`PropertyRegistry`] per reflecting type, keyed by
//! [`RegistryId`], and builds each registry the first time it is requested.
//!
//! `Registries` is an explicit value: create it where instances are
//! constructed and pass it by reference. Dropping it drops every registry.
//!
//! # Example
//!
//! ```
//! use reflekt_core::reflect::{Reflect, Registries};
//! use reflekt_core::registry::PropertyRegistry;
//!
//! struct Door {
//!     width: i32,
//! }
//!
//! impl Reflect for Door {
//!     fn register(registry: &mut PropertyRegistry<Self>) {
//!         registry.add("Width", "VisibleAnywhere", |d: &Door| &d.width);
//!     }
//! }
//!
//! let registries = Registries::new();
//! let door = Door { width: 90 };
//!
//! let registry = door.get_registry(&registries);
//! assert_eq!(
//!     registry.render_all(&door),
//!     "Property: Width | Type: i32 | Meta: VisibleAnywhere | Value: 90\n"
//! );
//! ```

use crate::registry::PropertyRegistry;
use core::any::{Any, TypeId};
use hashbrown::HashMap;
use parking_lot::RwLock;
use std::sync::Arc;

// Re-export the derive macro.
pub use reflekt_reflect_macros::Reflect;

/// A type whose fields can be enumerated and printed through a
/// [`PropertyRegistry`].
///
/// Can be derived via `#[derive(Reflect)]`:
///
/// ```
/// use reflekt_core::reflect::{Reflect, Registries};
///
/// #[derive(Reflect)]
/// struct Lamp {
///     #[property(rename = "Brightness", meta = "EditAnywhere")]
///     brightness: f32,
///     #[property]
///     label: String,
///     // Not a property.
///     cache: Vec<u8>,
/// }
///
/// let registries = Registries::new();
/// let registry = registries.registry::<Lamp>();
/// assert_eq!(registry.names(), vec!["Brightness", "label"]);
/// ```
pub trait Reflect: Sized + 'static {
    /// Declares this type's properties, in display order.
    ///
    /// Called once per [`Registries`], when the registry for `Self` is first
    /// requested.
    fn register(registry: &mut PropertyRegistry<Self>);

    /// Returns the shared registry for this instance's type.
    ///
    /// Identical to [`Registries::registry::<Self>()`](Registries::registry).
    fn get_registry(&self, registries: &Registries) -> Arc<PropertyRegistry<Self>> {
        registries.registry::<Self>()
    }
}

/// Unique identifier for a reflecting type.
///
/// Used internally to key registries in the storage map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryId(TypeId);

impl RegistryId {
    /// Creates a `RegistryId` for the given type.
    #[must_use]
    pub fn of<T: Reflect>() -> Self {
        Self(TypeId::of::<T>())
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.0
    }
}

/// Type-erased registry storage.
type ErasedRegistry = Arc<dyn Any + Send + Sync>;

/// Owner of one [`PropertyRegistry`] per reflecting type.
///
/// Registries are built lazily and never rebuilt: every call to
/// [`registry`](Self::registry) for the same type returns the same `Arc`.
///
/// # Thread Safety
///
/// The storage map is guarded by an `RwLock`. Built registries are immutable,
/// so handing out clones of the `Arc` is safe across threads.
#[derive(Default)]
pub struct Registries {
    storage: RwLock<HashMap<RegistryId, ErasedRegistry>>,
}

impl core::fmt::Debug for Registries {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registries")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Registries {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry for `T`, building it from [`Reflect::register`]
    /// on first access.
    pub fn registry<T: Reflect>(&self) -> Arc<PropertyRegistry<T>> {
        let id = RegistryId::of::<T>();

        if let Some(existing) = self.storage.read().get(&id) {
            return downcast::<T>(existing);
        }

        let mut storage = self.storage.write();
        // Another caller may have built it between the two locks.
        let entry = storage.entry(id).or_insert_with(|| {
            let mut registry = PropertyRegistry::<T>::new();
            T::register(&mut registry);
            tracing::debug!(
                reflecting = core::any::type_name::<T>(),
                properties = registry.len(),
                "property registry built"
            );
            let erased: ErasedRegistry = Arc::new(registry);
            erased
        });
        downcast::<T>(entry)
    }

    /// Returns `true` if the registry for `T` has already been built.
    #[must_use]
    pub fn contains<T: Reflect>(&self) -> bool {
        self.storage.read().contains_key(&RegistryId::of::<T>())
    }

    /// Returns the number of registries built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().len()
    }

    /// Returns `true` if no registry has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.read().is_empty()
    }
}

fn downcast<T: Reflect>(entry: &ErasedRegistry) -> Arc<PropertyRegistry<T>> {
    Arc::clone(entry)
        .downcast::<PropertyRegistry<T>>()
        .unwrap_or_else(|_| unreachable!("registry stored under the wrong type id"))
}
