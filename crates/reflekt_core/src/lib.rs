//! Runtime property reflection for reflekt.
//!
//! `reflekt_core` lets a type expose a subset of its fields as named,
//! enumerable properties:
//!
//! - [`kind`] - Type tags and rendered values
//! - [`property`] - Property descriptors and field accessors
//! - [`registry`] - Ordered per-type property registries
//! - [`mod@reflect`] - The `Reflect` capability and the per-type registry store
//! - [`macro@Reflect`] - Derive macro generating `Reflect::register`
//!
//! # Example
//!
//! ```
//! use reflekt_core::prelude::*;
//!
//! #[derive(Reflect)]
//! struct Player {
//!     #[property(rename = "Health", meta = "VisibleAnywhere")]
//!     health: i32,
//!     #[property(rename = "Name", meta = "EditAnywhere")]
//!     name: String,
//! }
//!
//! let registries = Registries::new();
//! let mut player = Player { health: 100, name: "Zoran".into() };
//!
//! player.health = 250;
//!
//! let mut out = Vec::new();
//! player.get_registry(&registries).print_all(&player, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Property: Health | Type: i32 | Meta: VisibleAnywhere | Value: 250\n\
//!      Property: Name | Type: String | Meta: EditAnywhere | Value: Zoran\n"
//! );
//! ```

// Self-reference so `#[derive(Reflect)]` output can use `::reflekt_core` paths
// within this crate.
extern crate self as reflekt_core;

/// Error type for registry operations.
pub mod error;

/// Type tags and rendered values.
pub mod kind;

/// Property descriptors.
pub mod property;

/// The `Reflect` capability and registry storage.
pub mod reflect;

/// Ordered property registries.
pub mod registry;

pub use error::ReflectError;
pub use reflect::Reflect;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::kind::*;
    pub use crate::property::*;
    pub use crate::reflect::*;
    pub use crate::registry::*;
}
